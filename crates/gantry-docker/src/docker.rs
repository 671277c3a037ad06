#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    #[error("docker CLI not found, install: https://docs.docker.com/engine/install/")]
    NotFound { source: std::io::Error },

    #[error("docker command failed: {args:?}\n{stderr}")]
    CommandFailed { args: Vec<String>, stderr: String },

    #[error("docker output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },
}
