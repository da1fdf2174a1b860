//! Runtime configuration re-exports and utilities.
//!
//! The actual config types are defined in `pixpay-core::config`.
//! This module re-exports them for convenience.

pub use pixpay_core::config::{
    Environment, GatewayConfig, GatewayCredentials, ServerConfig, SharedConfig,
};
