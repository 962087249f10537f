//! Config file loading

use crate::config::error::ConfigError;
use crate::config::raw::DeployConfigRaw;
use crate::domain::DeployConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// `{run_dir}/config/{config_name}.json`
pub fn resolve_config_path(run_dir: &Path, config_name: &str) -> PathBuf {
    run_dir.join("config").join(format!("{config_name}.json"))
}

/// Load and validate the deployment config for `config_name` under `run_dir`.
pub fn load_config(run_dir: &Path, config_name: &str) -> Result<DeployConfig, ConfigError> {
    let path = resolve_config_path(run_dir, config_name);
    tracing::debug!("Loading config from {}", path.display());

    if !path.exists() {
        return Err(ConfigError::NotFound { path });
    }

    let content = fs::read_to_string(&path)
        .map_err(|source| ConfigError::Read { path: path.clone(), source })?;

    let config = parse_config(&content, &path)?;
    tracing::debug!(
        "Loaded config {} with {} gateway(s)",
        path.display(),
        config.gateway_servers.len()
    );
    Ok(config)
}

/// Parse config text. `path` is only used for error reporting.
pub fn parse_config(content: &str, path: &Path) -> Result<DeployConfig, ConfigError> {
    let raw: DeployConfigRaw = serde_json::from_str(content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

    raw.validate().map_err(|problems| ConfigError::Invalid { path: path.to_path_buf(), problems })
}
