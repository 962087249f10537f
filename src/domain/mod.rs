//! Core data types shared by the loaders, renderers and converters.

mod deploy;
mod problem;

pub use deploy::{AssetServer, DeployConfig, GatewayServer, PublicAddresses, TerminalServer};
pub use problem::Problem;

/// Config name used when the caller does not pick one.
pub const DEFAULT_CONFIG_NAME: &str = "production";
