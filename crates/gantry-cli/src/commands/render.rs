use std::path::Path;

use gantry_build::DockerfileGenerator;

pub async fn render(name: Option<&str>, output: Option<&Path>) -> anyhow::Result<()> {
    let (_, profile) = super::resolve_profile(Path::new("."), name)?;
    super::ensure_valid(&profile)?;

    let dockerfile = DockerfileGenerator::new(&profile).render();
    match output {
        Some(path) => {
            std::fs::write(path, &dockerfile)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{dockerfile}"),
    }

    Ok(())
}
