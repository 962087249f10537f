//! Structs mirroring the JSON document, with every field optional.
//!
//! Deserialization only fails on malformed JSON or wrong value types.
//! Missing keys are collected by [`DeployConfigRaw::validate`].

use crate::domain::{AssetServer, DeployConfig, GatewayServer, PublicAddresses, TerminalServer};
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployConfigRaw {
    pub public_address: Option<String>,
    pub asset_server: Option<AssetServerRaw>,
    pub gateway_servers: Option<IndexMap<String, GatewayServerRaw>>,
    pub terminal: Option<TerminalServerRaw>,
    pub public_addresses: Option<PublicAddressesRaw>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssetServerRaw {
    pub port: Option<PortRaw>,
    pub address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayServerRaw {
    pub http_address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalServerRaw {
    pub internal_address: Option<String>,
    pub socketio_port: Option<PortRaw>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAddressesRaw {
    pub asset_service: Option<String>,
    pub gateway_service: Option<String>,
}

/// Ports show up both as JSON numbers and as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PortRaw {
    Number(serde_json::Number),
    Text(String),
}

impl PortRaw {
    pub fn into_text(self) -> String {
        match self {
            PortRaw::Number(n) => n.to_string(),
            PortRaw::Text(s) => s,
        }
    }
}

fn missing(problems: &mut Vec<String>, key: &str) {
    problems.push(format!("missing key `{key}`"));
}

impl DeployConfigRaw {
    /// Build the validated config, or return every problem found.
    pub fn validate(self) -> Result<DeployConfig, Vec<String>> {
        let mut problems = Vec::new();

        let public_address = self.public_address;
        if public_address.is_none() {
            missing(&mut problems, "publicAddress");
        }

        let asset_server = match self.asset_server {
            Some(raw) => {
                if raw.port.is_none() {
                    missing(&mut problems, "assetServer.port");
                }
                raw.port.map(|port| AssetServer { port: port.into_text(), address: raw.address })
            }
            None => {
                missing(&mut problems, "assetServer");
                None
            }
        };

        let mut gateway_servers = IndexMap::new();
        match self.gateway_servers {
            Some(raw) => {
                for (name, gateway) in raw {
                    let Some(http_address) = gateway.http_address else {
                        missing(&mut problems, &format!("gatewayServers.{name}.httpAddress"));
                        continue;
                    };
                    match GatewayServer::from_http_address(&http_address) {
                        Some(server) => {
                            gateway_servers.insert(name, server);
                        }
                        None => {
                            let key = format!("gatewayServers.{name}.httpAddress");
                            problems.push(format!(
                                "`{key}` must be host:port, got '{http_address}'"
                            ));
                        }
                    }
                }
            }
            None => missing(&mut problems, "gatewayServers"),
        }

        // Optional sections are taken as-is; a missing sub-key only matters
        // to templates that reference it.
        let terminal = self.terminal.map(|raw| TerminalServer {
            internal_address: raw.internal_address,
            socketio_port: raw.socketio_port.map(PortRaw::into_text),
        });

        let public_addresses = self.public_addresses.map(|raw| PublicAddresses {
            asset_service: raw.asset_service,
            gateway_service: raw.gateway_service,
        });

        match (public_address, asset_server) {
            (Some(public_address), Some(asset_server)) if problems.is_empty() => Ok(DeployConfig {
                public_address,
                asset_server,
                gateway_servers,
                terminal,
                public_addresses,
            }),
            _ => Err(problems),
        }
    }
}
