use std::path::PathBuf;

use gantry_build::DockerfileGenerator;
use gantry_build::{context, eject as eject_mod};
use gantry_core::PythonProject;
use gantry_docker::DockerClient;

/// Execute the full build pipeline.
pub async fn build(name: Option<&str>, tag: Option<&str>, allow_dirty: bool) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let client = DockerClient::new();

    // Dirty check: refuse to bake uncommitted changes unless --allow-dirty
    if !allow_dirty && context::is_dirty(&project_dir)? {
        anyhow::bail!(
            "uncommitted changes detected.\n\
             Commit your changes, or use `gantry build --allow-dirty` to build anyway."
        );
    }

    let (config, profile) = super::resolve_profile(&project_dir, name)?;

    // The image must serve the project that is actually here
    let python = PythonProject::discover(&project_dir, &profile.requirements)?;
    if python.app_module != profile.entrypoint.module {
        tracing::warn!(
            found = %python.app_module,
            configured = %profile.entrypoint.module,
            "ASGI module on disk differs from the profile entrypoint"
        );
    }

    super::ensure_valid(&profile)?;

    let service_name = config
        .project
        .name
        .clone()
        // arch-lint: allow(no-silent-result-drop) reason="Option fallback, no error to drop"
        .unwrap_or_else(|| python.app_module.clone());
    let image_tag = tag
        .map(str::to_owned)
        // arch-lint: allow(no-silent-result-drop) reason="Option fallback, no error to drop"
        .unwrap_or_else(|| format!("{service_name}:{}", profile.name));

    // Determine Dockerfile content
    let dockerfile_content = if eject_mod::is_ejected(&project_dir) {
        println!("Using ejected Dockerfile from .gantry/Dockerfile");
        eject_mod::load_ejected_dockerfile(&project_dir)?
    } else {
        DockerfileGenerator::new(&profile).render()
    };

    println!("Assembling build context...");
    let context_dir = context::create_context(&project_dir, &dockerfile_content)?;

    println!("Building image {image_tag}...");
    client.build_image(&context_dir, &image_tag).await?;

    println!();
    println!("Built: {image_tag}");

    Ok(())
}
