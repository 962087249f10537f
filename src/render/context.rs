//! Typed values available to templates.

use super::target::RenderTarget;
use crate::domain::DeployConfig;
use std::borrow::Cow;

/// Every name a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    PublicAddress,
    Online,
    Gateways,
    Terminal,
    OnlineAddress,
    GatewayAddress,
}

impl Placeholder {
    pub const ALL: [Placeholder; 6] = [
        Placeholder::PublicAddress,
        Placeholder::Online,
        Placeholder::Gateways,
        Placeholder::Terminal,
        Placeholder::OnlineAddress,
        Placeholder::GatewayAddress,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::PublicAddress => "publicAddress",
            Placeholder::Online => "online",
            Placeholder::Gateways => "gateways",
            Placeholder::Terminal => "terminal",
            Placeholder::OnlineAddress => "onlineAddress",
            Placeholder::GatewayAddress => "gatewayAddress",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Required placeholders must appear in every template.
    pub fn is_required(self) -> bool {
        matches!(self, Placeholder::PublicAddress | Placeholder::Online | Placeholder::Gateways)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayEntry {
    pub name: String,
    pub port: String,
}

/// Values derived from a [`DeployConfig`], independent of output syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub public_address: String,
    /// `online:<asset port>`
    pub online: String,
    pub gateways: Vec<GatewayEntry>,
    pub terminal: Option<String>,
    pub online_address: Option<String>,
    pub gateway_address: Option<String>,
}

impl RenderContext {
    pub fn from_config(config: &DeployConfig) -> Self {
        let addresses = config.public_addresses.as_ref();
        Self {
            public_address: config.public_address.clone(),
            online: format!("online:{}", config.asset_server.port),
            gateways: config
                .gateway_servers
                .iter()
                .map(|(name, server)| GatewayEntry {
                    name: name.clone(),
                    port: server.port.clone(),
                })
                .collect(),
            terminal: config.terminal.as_ref().and_then(|t| t.socket_address()),
            online_address: addresses.and_then(|a| a.asset_service.clone()),
            gateway_address: addresses.and_then(|a| a.gateway_service.clone()),
        }
    }

    /// Text substituted for `placeholder`, or `None` when the config lacks it.
    pub fn value(&self, placeholder: Placeholder, target: RenderTarget) -> Option<Cow<'_, str>> {
        match placeholder {
            Placeholder::PublicAddress => Some(Cow::Borrowed(&self.public_address)),
            Placeholder::Online => Some(Cow::Borrowed(&self.online)),
            Placeholder::Gateways => Some(Cow::Owned(self.gateway_block(target))),
            Placeholder::Terminal => self.terminal.as_deref().map(Cow::Borrowed),
            Placeholder::OnlineAddress => self.online_address.as_deref().map(Cow::Borrowed),
            Placeholder::GatewayAddress => self.gateway_address.as_deref().map(Cow::Borrowed),
        }
    }

    /// Concatenated gateway lines; empty when there are no gateways.
    pub fn gateway_block(&self, target: RenderTarget) -> String {
        self.gateways.iter().map(|gw| target.gateway_line(&gw.name, &gw.port)).collect()
    }

    /// Raw inputs behind `placeholder`, labelled for error messages.
    ///
    /// The gateway block is checked through its names and ports, since its
    /// own line breaks are generated here.
    pub(crate) fn inputs(&self, placeholder: Placeholder) -> Vec<(String, &str)> {
        let name = placeholder.name().to_string();
        match placeholder {
            Placeholder::PublicAddress => vec![(name, self.public_address.as_str())],
            Placeholder::Online => vec![(name, self.online.as_str())],
            Placeholder::Gateways => self
                .gateways
                .iter()
                .flat_map(|gw| {
                    [
                        (format!("gatewayServers.{}", gw.name), gw.name.as_str()),
                        (format!("gatewayServers.{}.port", gw.name), gw.port.as_str()),
                    ]
                })
                .collect(),
            Placeholder::Terminal => {
                self.terminal.iter().map(|v| (name.clone(), v.as_str())).collect()
            }
            Placeholder::OnlineAddress => {
                self.online_address.iter().map(|v| (name.clone(), v.as_str())).collect()
            }
            Placeholder::GatewayAddress => {
                self.gateway_address.iter().map(|v| (name.clone(), v.as_str())).collect()
            }
        }
    }
}

/// Whether `value` can sit inside an nginx or haproxy directive unchanged.
pub fn is_directive_safe(value: &str) -> bool {
    !value.chars().any(|c| {
        c.is_whitespace() || c.is_control() || matches!(c, '{' | '}' | ';' | '#' | '"' | '\'')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use std::path::Path;

    fn context(json: &str) -> RenderContext {
        RenderContext::from_config(&parse_config(json, Path::new("test.json")).expect("config"))
    }

    #[test]
    fn placeholder_names_round_trip() {
        for p in Placeholder::ALL {
            assert_eq!(Placeholder::from_name(p.name()), Some(p));
        }
        assert_eq!(Placeholder::from_name("gatewayServers"), None);
    }

    #[test]
    fn optional_values_follow_config_sections() {
        let ctx = context(
            r#"{"publicAddress":"1.2.3.4","assetServer":{"port":8080},"gatewayServers":{},
                "terminal":{"internalAddress":"10.0.0.5","socketioPort":3000},
                "publicAddresses":{"assetService":"a.example","gatewayService":"g.example"}}"#,
        );
        let target = RenderTarget::Nginx;
        assert_eq!(ctx.value(Placeholder::Online, target).as_deref(), Some("online:8080"));
        assert_eq!(ctx.value(Placeholder::Terminal, target).as_deref(), Some("10.0.0.5:3000"));
        assert_eq!(ctx.value(Placeholder::OnlineAddress, target).as_deref(), Some("a.example"));
        assert_eq!(ctx.value(Placeholder::GatewayAddress, target).as_deref(), Some("g.example"));
        assert_eq!(ctx.value(Placeholder::Gateways, target).as_deref(), Some(""));

        let bare = context(r#"{"publicAddress":"x","assetServer":{"port":1},"gatewayServers":{}}"#);
        assert!(bare.value(Placeholder::Terminal, target).is_none());
        assert!(bare.value(Placeholder::OnlineAddress, target).is_none());
    }

    #[test]
    fn directive_safety() {
        assert!(is_directive_safe("1.2.3.4"));
        assert!(is_directive_safe("online:8080"));
        assert!(is_directive_safe(""));
        assert!(!is_directive_safe("evil;\n  server other"));
        assert!(!is_directive_safe("a b"));
        assert!(!is_directive_safe("x}"));
        assert!(!is_directive_safe("gw#1"));
    }
}
