use std::path::Path;

use crate::docker::DockerError;
use crate::executor::{DockerExecutor, RealExecutor};

/// Docker operations client, parameterized over the executor for testability.
pub struct DockerClient<E: DockerExecutor = RealExecutor> {
    executor: E,
}

impl DockerClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for DockerClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DockerExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    // ── Image build ──

    /// Build an image from a prepared context directory, streaming builder
    /// output to the terminal.
    ///
    /// Any failing step aborts the whole build and surfaces as
    /// [`BuildImageError::Build`]; docker tags no partial image. There are
    /// no retries, a failed attempt is terminal.
    pub async fn build_image(&self, context_dir: &Path, tag: &str) -> Result<(), BuildImageError> {
        let context = context_dir
            .to_str()
            .ok_or_else(|| BuildImageError::InvalidPath(context_dir.to_path_buf()))?;

        tracing::info!(tag = %tag, context = %context, "running docker build");
        self.executor
            .exec_streaming(&args(["build", "-t", tag, context]))
            .await
            .map_err(|e| BuildImageError::Build { source: e })
    }

    // ── Doctor ──

    /// Run docker diagnostics without early return.
    ///
    /// Fills the docker CLI and daemon checks; callers add the
    /// project-level checks before displaying the report.
    pub async fn doctor(&self) -> DoctorReport {
        let mut report = DoctorReport::default();

        match self
            .executor
            .exec(&args(["version", "--format", "{{.Client.Version}}"]))
            .await
        {
            Ok(version) => report.docker = CheckResult::ok(version.trim()),
            Err(e) => report.docker = CheckResult::fail(&e.to_string()),
        }

        match self
            .executor
            .exec(&args(["info", "--format", "{{.ServerVersion}}"]))
            .await
        {
            Ok(version) => {
                report.daemon = CheckResult::ok(&format!("server {}", version.trim()));
            }
            Err(_) => report.daemon = CheckResult::fail("daemon not reachable"),
        }

        report
    }
}

// ── Helper ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

// ── Doctor types ──

#[derive(Debug, Default)]
pub struct DoctorReport {
    pub docker: CheckResult,
    pub daemon: CheckResult,
    pub config_file: CheckResult,
    pub manifest: CheckResult,
    pub app_module: CheckResult,
}

impl DoctorReport {
    pub fn all_passed(&self) -> bool {
        self.docker.passed
            && self.daemon.passed
            && self.config_file.passed
            && self.manifest.passed
            && self.app_module.passed
    }
}

impl std::fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = [
            ("Docker CLI", &self.docker),
            ("Docker daemon", &self.daemon),
            ("gantry.toml", &self.config_file),
            ("Dependency manifest", &self.manifest),
            ("ASGI module", &self.app_module),
        ];
        for (label, check) in rows {
            writeln!(f, "  [{}] {:<20} {}", check.icon(), label, check.detail)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct CheckResult {
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    pub fn ok(detail: &str) -> Self {
        Self {
            passed: true,
            detail: detail.to_owned(),
        }
    }

    pub fn fail(detail: &str) -> Self {
        Self {
            passed: false,
            detail: detail.to_owned(),
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.passed { "OK" } else { "NG" }
    }
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum BuildImageError {
    #[error("context path is not valid UTF-8: {0}")]
    InvalidPath(std::path::PathBuf),

    #[error("docker build failed")]
    Build { source: DockerError },
}
