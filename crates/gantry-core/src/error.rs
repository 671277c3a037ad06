use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(
        "unknown profile '{name}'; defined profiles: {}",
        format_names(known)
    )]
    UnknownProfile { name: String, known: Vec<String> },

    #[error("invalid entrypoint {value:?}: expected module:attribute")]
    InvalidEntrypoint { value: String },

    #[error(
        "no dependency manifest at {path}: create requirements.txt or set [build].requirements"
    )]
    MissingRequirements { path: PathBuf },

    #[error(
        "no ASGI module found in {dir}; looked for {}",
        candidates.join(", ")
    )]
    NoAppModule {
        dir: PathBuf,
        candidates: Vec<String>,
    },
}

fn format_names(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_owned()
    } else {
        names.join(", ")
    }
}
