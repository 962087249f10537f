//! Validated deployment configuration.

use indexmap::IndexMap;

/// Deployment configuration after validation.
///
/// Every field here is guaranteed present; optional sections are `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub public_address: String,
    pub asset_server: AssetServer,
    /// Gateways in document order.
    pub gateway_servers: IndexMap<String, GatewayServer>,
    pub terminal: Option<TerminalServer>,
    pub public_addresses: Option<PublicAddresses>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetServer {
    /// Port, already coerced to its textual form.
    pub port: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayServer {
    /// Raw `host:port` value.
    pub http_address: String,
    /// Port component of `http_address`.
    pub port: String,
}

impl GatewayServer {
    /// Split a `host:port` address. Returns `None` when there is no port part.
    ///
    /// The port is the second colon-separated component, so `a:b:c` yields `b`.
    pub fn from_http_address(http_address: &str) -> Option<Self> {
        let port = http_address.split(':').nth(1)?;
        if port.is_empty() {
            return None;
        }
        Some(Self { http_address: http_address.to_string(), port: port.to_string() })
    }
}

/// Terminal section. Sub-keys are only needed by templates using `{terminal}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalServer {
    pub internal_address: Option<String>,
    pub socketio_port: Option<String>,
}

impl TerminalServer {
    /// `internalAddress:socketioPort`, when both are set.
    pub fn socket_address(&self) -> Option<String> {
        let address = self.internal_address.as_deref()?;
        let port = self.socketio_port.as_deref()?;
        Some(format!("{address}:{port}"))
    }
}

/// Publicly reachable service addresses used by older nginx templates.
///
/// Deployments may set either one alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicAddresses {
    pub asset_service: Option<String>,
    pub gateway_service: Option<String>,
}
