use std::path::Path;

/// Ejects the generated Dockerfile into the project directory.
///
/// After ejecting, `gantry build` uses `.gantry/Dockerfile` instead of
/// generating one from the profile.
pub fn eject(project_dir: &Path, dockerfile_content: &str) -> Result<(), EjectError> {
    let gantry_dir = project_dir.join(".gantry");
    std::fs::create_dir_all(&gantry_dir).map_err(|e| EjectError::Io {
        op: "create",
        path: gantry_dir.clone(),
        source: e,
    })?;

    let dockerfile_path = gantry_dir.join("Dockerfile");
    if dockerfile_path.exists() {
        return Err(EjectError::AlreadyEjected(dockerfile_path));
    }

    std::fs::write(&dockerfile_path, dockerfile_content).map_err(|e| EjectError::Io {
        op: "write",
        path: dockerfile_path,
        source: e,
    })?;

    Ok(())
}

/// Check if the project has an ejected Dockerfile.
pub fn is_ejected(project_dir: &Path) -> bool {
    project_dir.join(".gantry").join("Dockerfile").exists()
}

/// Load ejected Dockerfile content.
pub fn load_ejected_dockerfile(project_dir: &Path) -> Result<String, EjectError> {
    let path = project_dir.join(".gantry").join("Dockerfile");
    std::fs::read_to_string(&path).map_err(|e| EjectError::Io {
        op: "read",
        path,
        source: e,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum EjectError {
    #[error("Dockerfile already ejected at {0}; edit directly or delete to re-eject")]
    AlreadyEjected(std::path::PathBuf),
    #[error("failed to {op} {path}")]
    Io {
        op: &'static str,
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
