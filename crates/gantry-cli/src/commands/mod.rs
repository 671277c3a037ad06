mod build;
mod doctor;
mod eject;
mod init;
mod list;
mod render;
mod show;
mod validate;

pub use build::build;
pub use doctor::doctor;
pub use eject::eject;
pub use init::init_project;
pub use list::list;
pub use render::render;
pub use show::show;
pub use validate::validate;

use std::path::Path;

use gantry_core::{GantryConfig, Profile};

/// Load gantry.toml and resolve the requested profile, falling back to
/// `[project].default_profile` when none is given.
pub(crate) fn resolve_profile(
    project_dir: &Path,
    name: Option<&str>,
) -> anyhow::Result<(GantryConfig, Profile)> {
    let config = GantryConfig::load(project_dir)?;
    let registry = config.registry()?;
    // arch-lint: allow(no-silent-result-drop) reason="Option fallback, no error to drop"
    let chosen = name.unwrap_or(config.project.default_profile.as_str());
    let profile = registry.resolve(chosen)?.clone();
    Ok((config, profile))
}

/// Refuse to proceed with a profile that violates the build invariants.
pub(crate) fn ensure_valid(profile: &Profile) -> anyhow::Result<()> {
    let violations = gantry_build::validate(profile);
    if violations.is_empty() {
        return Ok(());
    }
    for violation in &violations {
        eprintln!("  - {violation}");
    }
    anyhow::bail!(
        "profile '{}' is invalid: fix the violations above",
        profile.name
    )
}
