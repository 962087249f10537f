//! Output flavours and their gateway directive syntax.

use std::fmt;

const NGINX_TEMPLATE: &str = include_str!("../../templates/nginx-template.conf");
const HAPROXY_TEMPLATE: &str = include_str!("../../templates/haproxy-template.cfg");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    /// Reverse proxy: gateways become `server` lines in an upstream block.
    Nginx,
    /// Load balancer: gateways become named backends with a sticky cookie.
    Haproxy,
}

impl RenderTarget {
    pub const ALL: [RenderTarget; 2] = [RenderTarget::Nginx, RenderTarget::Haproxy];

    pub fn name(self) -> &'static str {
        match self {
            RenderTarget::Nginx => "nginx",
            RenderTarget::Haproxy => "haproxy",
        }
    }

    /// File written into the output directory.
    pub fn output_file_name(self) -> &'static str {
        match self {
            RenderTarget::Nginx => "nginx.conf",
            RenderTarget::Haproxy => "haproxy.cfg",
        }
    }

    /// File looked up in a user-supplied template directory.
    pub fn template_file_name(self) -> &'static str {
        match self {
            RenderTarget::Nginx => "nginx-template.conf",
            RenderTarget::Haproxy => "haproxy-template.cfg",
        }
    }

    /// Template compiled into the binary.
    pub fn builtin_template(self) -> &'static str {
        match self {
            RenderTarget::Nginx => NGINX_TEMPLATE,
            RenderTarget::Haproxy => HAPROXY_TEMPLATE,
        }
    }

    /// One newline-prefixed gateway directive.
    pub fn gateway_line(self, name: &str, port: &str) -> String {
        match self {
            RenderTarget::Nginx => format!("\n        server online:{port}; # {name}"),
            RenderTarget::Haproxy => {
                format!("\n  server {name} online:{port} check cookie {name}")
            }
        }
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
