//! Application state shared across all request handlers.

use crate::config::runtime::SharedConfig;
use sqlx::PgPool;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: PgPool,
    /// Runtime configuration (can be reloaded via SIGHUP).
    pub config: SharedConfig,
    /// Shared outbound HTTP client for the orders endpoint and the gateway.
    pub http: reqwest::Client,
}

impl AppState {
    /// Create a new AppState with the given database pool and configuration.
    pub fn new(db: PgPool, config: SharedConfig) -> Self {
        Self {
            db,
            config,
            http: reqwest::Client::new(),
        }
    }
}
