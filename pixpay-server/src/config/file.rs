//! TOML file configuration structures.
//!
//! These structs directly map to the `pixpay-config.toml` file format.

use pixpay_core::config::Environment;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub gateway: GatewaySection,
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
    /// Deployment environment; controls outbound protocol inference.
    #[serde(default = "default_environment")]
    pub environment: Environment,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
            environment: default_environment(),
        }
    }
}

/// Gateway configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySection {
    /// Root URL of the PayOnHub API.
    #[serde(default = "default_gateway_base_url")]
    pub base_url: Url,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            base_url: default_gateway_base_url(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    "0.0.0.0:8080".parse().expect("valid default address")
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_gateway_base_url() -> Url {
    "https://api.payonhub.com".parse().expect("valid default URL")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let toml_str = r#"
[server]
listen = "127.0.0.1:3000"
environment = "production"

[gateway]
base_url = "https://sandbox.payonhub.com"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen.port(), 3000);
        assert_eq!(config.server.environment, Environment::Production);
        assert_eq!(
            config.gateway.base_url.as_str(),
            "https://sandbox.payonhub.com/"
        );
    }

    #[test]
    fn test_defaults_apply_to_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.listen.port(), 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.gateway.base_url.as_str(), "https://api.payonhub.com/");
    }
}
