//! Configuration types for the pixpay server.
//!
//! These types represent the validated runtime configuration used by the server
//! and can be shared across crates. The actual config loading/parsing is handled
//! by the server crate.

mod gateway;
mod server;

pub use gateway::{GatewayConfig, GatewayCredentials};
pub use server::{Environment, ServerConfig};

use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared configuration state with separate locks for each section.
///
/// This allows independent access to different configuration sections
/// without blocking other readers/writers.
#[derive(Clone)]
pub struct SharedConfig {
    /// Server configuration (listen address, environment).
    pub server: Arc<RwLock<ServerConfig>>,
    /// Gateway configuration (base URL, credentials).
    pub gateway: Arc<RwLock<GatewayConfig>>,
}

impl SharedConfig {
    /// Create a new SharedConfig from individual configuration parts.
    pub fn new(server: ServerConfig, gateway: GatewayConfig) -> Self {
        Self {
            server: Arc::new(RwLock::new(server)),
            gateway: Arc::new(RwLock::new(gateway)),
        }
    }

    /// Get a read lock on the server configuration.
    pub async fn server(&self) -> tokio::sync::RwLockReadGuard<'_, ServerConfig> {
        self.server.read().await
    }

    /// Get a read lock on the gateway configuration.
    pub async fn gateway(&self) -> tokio::sync::RwLockReadGuard<'_, GatewayConfig> {
        self.gateway.read().await
    }
}
