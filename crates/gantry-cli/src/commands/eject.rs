use std::path::PathBuf;

use gantry_build::DockerfileGenerator;

pub async fn eject(name: Option<&str>) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let (_, profile) = super::resolve_profile(&project_dir, name)?;

    let dockerfile = DockerfileGenerator::new(&profile).render();
    gantry_build::eject::eject(&project_dir, &dockerfile)?;

    println!("Ejected Dockerfile to .gantry/Dockerfile");
    println!("You can now edit it directly. gantry build will use this file.");
    Ok(())
}
