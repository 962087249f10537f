//! Deployment configuration loading
//!
//! Resolves `{run_dir}/config/{name}.json`, parses it into a permissive raw
//! layer and validates that into a [`DeployConfig`](crate::domain::DeployConfig),
//! reporting every missing key at once.

pub mod error;
pub mod loader;
pub mod raw;

pub use error::ConfigError;
pub use loader::{load_config, parse_config, resolve_config_path};
