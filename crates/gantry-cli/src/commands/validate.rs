use std::path::Path;

use gantry_core::{GantryConfig, Profile};

pub async fn validate(name: Option<&str>) -> anyhow::Result<()> {
    let config = GantryConfig::load(Path::new("."))?;
    let registry = config.registry()?;

    let targets: Vec<Profile> = match name {
        Some(n) => vec![registry.resolve(n)?.clone()],
        None => registry.iter().cloned().collect(),
    };

    let mut failed = false;
    for profile in &targets {
        let violations = gantry_build::validate(profile);
        if violations.is_empty() {
            println!("{}: ok", profile.name);
        } else {
            failed = true;
            println!("{}: {} violation(s)", profile.name, violations.len());
            for violation in &violations {
                println!("  - {violation}");
            }
        }
    }

    if failed {
        anyhow::bail!("validation failed, see violations above");
    }
    Ok(())
}
