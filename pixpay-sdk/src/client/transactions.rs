//! Transactions API client (checkout server → PayOnHub).
//!
//! All requests use HTTP Basic authentication with the merchant's
//! public/secret key pair.

use reqwest::Client;
use url::Url;

use super::ClientError;
use crate::objects::transaction::{TransactionRequest, TransactionResponse};

/// Typed HTTP client for the PayOnHub **transactions API**.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: Client,
    base_url: Url,
    public_key: String,
    secret_key: String,
}

impl GatewayClient {
    /// Create a new `GatewayClient`.
    ///
    /// * `base_url` – root URL of the gateway API (e.g. `https://api.payonhub.com`).
    /// * `public_key` / `secret_key` – the Basic-auth credential pair.
    pub fn new(
        base_url: Url,
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url,
            public_key: public_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `POST /v1/transactions` – create a PIX charge.
    pub async fn create_transaction(
        &self,
        payload: &TransactionRequest,
    ) -> Result<TransactionResponse, ClientError> {
        let url = self.base_url.join("/v1/transactions")?;

        let resp = self
            .http
            .post(url)
            .basic_auth(&self.public_key, Some(&self.secret_key))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        parse_response(resp).await
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    if !status.is_success() {
        let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        });
        return Err(ClientError::Api { status, body });
    }
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}
