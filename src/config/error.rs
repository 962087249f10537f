use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading or validating a deployment config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed reading config file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file: {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config {}: {}", .path.display(), .problems.join("; "))]
    Invalid { path: PathBuf, problems: Vec<String> },
}
