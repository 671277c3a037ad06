use std::path::{Path, PathBuf};
use std::process::Output;

/// Files/directories gantry always keeps out of the build context,
/// regardless of .gitignore content. A tracked top-level `Dockerfile` is
/// also skipped: the rendered (or ejected) Dockerfile is authoritative.
const GANTRY_EXCLUDES: &[&str] = &[".gantry-build", ".gantry", ".git"];

/// Assembles the docker build context for a project.
///
/// Uses `git ls-files` to respect `.gitignore`, copies all tracked and
/// untracked-but-not-ignored files into `.gantry-build/`, and writes the
/// Dockerfile into it.
pub fn create_context(project_dir: &Path, dockerfile_content: &str) -> Result<PathBuf, ContextError> {
    let context_dir = project_dir.join(".gantry-build");

    // Previous context is stale the moment anything changed; rebuild it
    if context_dir.exists() {
        std::fs::remove_dir_all(&context_dir).map_err(io_err("clean up", &context_dir))?;
    }
    std::fs::create_dir_all(&context_dir).map_err(io_err("create", &context_dir))?;

    let files = project_files(project_dir)?;
    tracing::debug!(count = files.len(), "copying project files into context");

    for relative_path in &files {
        if is_excluded(relative_path) {
            continue;
        }

        let src = project_dir.join(relative_path);
        let dst = context_dir.join(relative_path);

        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent).map_err(io_err("create", parent))?;
        }
        std::fs::copy(&src, &dst).map_err(io_err("copy", &src))?;
    }

    let dockerfile_path = context_dir.join("Dockerfile");
    std::fs::write(&dockerfile_path, dockerfile_content)
        .map_err(io_err("write", &dockerfile_path))?;

    Ok(context_dir)
}

fn is_excluded(relative_path: &Path) -> bool {
    if relative_path == Path::new("Dockerfile") {
        tracing::warn!("tracked Dockerfile shadowed by the generated one");
        return true;
    }
    GANTRY_EXCLUDES
        .iter()
        .any(|ex| relative_path.starts_with(ex))
}

/// The files git considers part of the project: tracked files plus
/// untracked files that are not .gitignored.
fn project_files(project_dir: &Path) -> Result<Vec<PathBuf>, ContextError> {
    let output = git(
        project_dir,
        &["ls-files", "--cached", "--others", "--exclude-standard"],
    )?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Checks whether the git working tree has uncommitted changes.
pub fn is_dirty(project_dir: &Path) -> Result<bool, ContextError> {
    let output = git(project_dir, &["status", "--porcelain"])?;
    Ok(!output.stdout.is_empty())
}

fn git(project_dir: &Path, args: &[&str]) -> Result<Output, ContextError> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(project_dir)
        .output()
        .map_err(|e| ContextError::GitCommand {
            detail: format!("failed to execute git {}", args[0]),
            source: e,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ContextError::GitFailed {
            detail: format!(
                "git {} exited with {}: {}",
                args[0],
                output.status,
                stderr.trim()
            ),
        });
    }

    Ok(output)
}

fn io_err(op: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> ContextError {
    let path = path.to_path_buf();
    move |source| ContextError::Io { op, path, source }
}

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("failed to {op} {path}")]
    Io {
        op: &'static str,
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("git command failed: {detail}")]
    GitCommand {
        detail: String,
        source: std::io::Error,
    },
    #[error("git failed: {detail}")]
    GitFailed { detail: String },
}
