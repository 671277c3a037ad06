use std::path::Path;

use gantry_core::GantryConfig;

pub async fn list() -> anyhow::Result<()> {
    let config = GantryConfig::load(Path::new("."))?;
    let registry = config.registry()?;

    for profile in registry.iter() {
        let marker = if profile.name == config.project.default_profile {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {:<12} {:<18} port {:<5} {} native packages",
            profile.name,
            profile.base_image(),
            profile.exposed_port,
            profile.system_packages.len(),
        );
    }

    Ok(())
}
