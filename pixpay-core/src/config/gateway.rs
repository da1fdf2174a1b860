//! Payment gateway configuration.

use url::Url;

/// PayOnHub gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Root URL of the gateway API.
    pub base_url: Url,
    /// Basic-auth credential pair; `None` until the environment provides one.
    pub credentials: Option<GatewayCredentials>,
}

/// Basic-auth credential pair for the gateway.
#[derive(Debug, Clone)]
pub struct GatewayCredentials {
    pub public_key: String,
    pub secret_key: String,
}
