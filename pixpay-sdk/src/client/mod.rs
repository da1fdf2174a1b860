//! HTTP client for the PayOnHub gateway.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the wire types do not pull in `reqwest`.

mod transactions;

pub use transactions::GatewayClient;

use reqwest::StatusCode;

/// Errors produced by the SDK HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway returned a non-2xx status code.
    ///
    /// `body` is the gateway's reply parsed leniently: JSON when possible,
    /// the raw text as a JSON string otherwise.
    #[error("gateway error: status {status}, body: {body}")]
    Api {
        status: StatusCode,
        body: serde_json::Value,
    },

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}
