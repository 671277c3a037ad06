//! Python project discovery.
//!
//! There is no manifest protocol to query for a Python service, so
//! discovery is filesystem-shaped: the pip manifest must exist, and one of
//! the conventional module files provides the ASGI object.

use std::path::{Path, PathBuf};

/// Module files probed for the ASGI object, in preference order.
const APP_MODULE_CANDIDATES: &[&str] = &["app.py", "main.py"];

/// A discovered Python ASGI service.
///
/// # Examples
///
/// ```no_run
/// use gantry_core::PythonProject;
/// use std::path::Path;
///
/// let project = PythonProject::discover(Path::new("."), "requirements.txt").unwrap();
/// println!("serving {}:app", project.app_module);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonProject {
    /// Absolute or caller-relative project directory
    pub project_dir: PathBuf,
    /// Importable module name holding the ASGI object (e.g. `app`)
    pub app_module: String,
    /// Path to the pip dependency manifest
    pub requirements: PathBuf,
}

impl PythonProject {
    /// Discover the Python project at the given directory.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingRequirements`] if the manifest is absent
    /// - [`Error::NoAppModule`] if none of the candidate module files exist
    ///
    /// [`Error::MissingRequirements`]: crate::Error::MissingRequirements
    /// [`Error::NoAppModule`]: crate::Error::NoAppModule
    pub fn discover(project_dir: &Path, requirements: &str) -> crate::Result<Self> {
        let manifest = project_dir.join(requirements);
        if !manifest.exists() {
            return Err(crate::Error::MissingRequirements { path: manifest });
        }

        tracing::debug!(dir = %project_dir.display(), "probing for ASGI module");
        let module = APP_MODULE_CANDIDATES
            .iter()
            .find(|candidate| project_dir.join(candidate).is_file())
            .and_then(|candidate| candidate.strip_suffix(".py"))
            .ok_or_else(|| crate::Error::NoAppModule {
                dir: project_dir.to_path_buf(),
                candidates: APP_MODULE_CANDIDATES
                    .iter()
                    .map(|c| (*c).to_owned())
                    .collect(),
            })?;

        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            app_module: module.to_owned(),
            requirements: manifest,
        })
    }
}
