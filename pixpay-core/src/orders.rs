//! Client for the storefront's internal order-lookup endpoint.
//!
//! The checkout flow does not own orders; it reads them back from the same
//! host that served the storefront, forwarding the shopper's session cookie.

use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::config::Environment;

/// An order as returned by `GET {base}/api/orders/{order_id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub total: Decimal,
    pub user_id: Uuid,
    pub items: Vec<OrderItem>,
}

/// A single order line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: u32,
    pub name: String,
    /// Per-unit price in decimal currency (`price` on the wire).
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
struct OrderEnvelope {
    order: Order,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: String,
}

/// Errors from the order lookup.
#[derive(Debug, thiserror::Error)]
pub enum OrderFetchError {
    /// The request itself failed (DNS, connect, read).
    #[error("order request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with something other than JSON.
    #[error("expected JSON from the orders endpoint but received {content_type:?}")]
    UnexpectedContentType { content_type: String },

    /// The body claimed to be JSON but did not parse.
    #[error("invalid JSON from the orders endpoint: {0}")]
    InvalidJson(serde_json::Error),

    /// The endpoint reported a failure; its status and message are relayed.
    #[error("order lookup failed with status {status}: {message}")]
    Upstream { status: u16, message: String },

    /// A success reply that does not match the order envelope.
    #[error("malformed order payload: {0}")]
    MalformedOrder(serde_json::Error),
}

/// Build the absolute base URL for same-host requests and callbacks.
///
/// `https` only when running in production against a non-local host; local
/// and development traffic stays on plain `http`.
pub fn infer_base_url(host: &str, environment: Environment) -> String {
    let protocol = if environment.is_production() && !host.contains("localhost") {
        "https"
    } else {
        "http"
    };
    format!("{protocol}://{host}")
}

/// Interpret a reply from the orders endpoint.
///
/// The content-type gate comes first: a non-JSON reply is fatal regardless
/// of status. An error status with a JSON body relays the body's `error`
/// message (or a default) together with the upstream status.
pub fn parse_order_body(
    status: u16,
    content_type: &str,
    body: &str,
) -> Result<Order, OrderFetchError> {
    if !content_type.contains("application/json") {
        return Err(OrderFetchError::UnexpectedContentType {
            content_type: content_type.to_owned(),
        });
    }

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(OrderFetchError::InvalidJson)?;

    if !(200..300).contains(&status) {
        let message = serde_json::from_value::<UpstreamErrorBody>(value)
            .map(|b| b.error)
            .unwrap_or_else(|_| "Order not found".to_owned());
        return Err(OrderFetchError::Upstream { status, message });
    }

    let envelope: OrderEnvelope =
        serde_json::from_value(value).map_err(OrderFetchError::MalformedOrder)?;
    Ok(envelope.order)
}

/// Client for the internal orders endpoint.
#[derive(Debug, Clone)]
pub struct OrdersClient {
    http: reqwest::Client,
}

impl OrdersClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// `GET {base_url}/api/orders/{order_id}` with the shopper's session
    /// cookie forwarded.
    pub async fn fetch_order(
        &self,
        base_url: &str,
        order_id: &str,
        token: &str,
    ) -> Result<Order, OrderFetchError> {
        let url = format!("{base_url}/api/orders/{order_id}");
        tracing::debug!(url = %url, "fetching order");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::COOKIE, format!("token={token}"))
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let body = response.text().await?;

        parse_order_body(status, &content_type, &body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ORDER_BODY: &str = r#"{
        "order": {
            "total": 19.99,
            "userId": "5f8b1c9a-3e2d-4b7a-9c1e-2a6f8d4e0b3c",
            "items": [
                {"productId": 7, "quantity": 2, "name": "Coffee beans", "price": 9.995}
            ]
        }
    }"#;

    #[test]
    fn parses_success_envelope() {
        let order = parse_order_body(200, "application/json; charset=utf-8", ORDER_BODY).unwrap();
        assert_eq!(order.total, Decimal::new(1999, 2));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].name, "Coffee beans");
        assert_eq!(order.items[0].quantity, 2);
    }

    #[test]
    fn non_json_content_type_is_fatal() {
        let result = parse_order_body(200, "text/html", "<html>login</html>");
        assert!(matches!(
            result,
            Err(OrderFetchError::UnexpectedContentType { content_type }) if content_type == "text/html"
        ));
    }

    #[test]
    fn malformed_json_is_fatal_even_on_error_status() {
        let result = parse_order_body(404, "application/json", "not json at all");
        assert!(matches!(result, Err(OrderFetchError::InvalidJson(_))));
    }

    #[test]
    fn relays_upstream_error_status_and_message() {
        let result = parse_order_body(404, "application/json", r#"{"error":"Order not found"}"#);
        assert!(matches!(
            result,
            Err(OrderFetchError::Upstream { status: 404, message }) if message == "Order not found"
        ));
    }

    #[test]
    fn error_status_without_message_gets_a_default() {
        let result = parse_order_body(500, "application/json", r#"{"unexpected":true}"#);
        assert!(matches!(
            result,
            Err(OrderFetchError::Upstream { status: 500, message }) if message == "Order not found"
        ));
    }

    #[test]
    fn success_body_without_order_is_malformed() {
        let result = parse_order_body(200, "application/json", r#"{"ok":true}"#);
        assert!(matches!(result, Err(OrderFetchError::MalformedOrder(_))));
    }

    #[test]
    fn base_url_is_http_outside_production() {
        assert_eq!(
            infer_base_url("shop.example.com", Environment::Development),
            "http://shop.example.com"
        );
        assert_eq!(
            infer_base_url("localhost:8080", Environment::Development),
            "http://localhost:8080"
        );
    }

    #[test]
    fn base_url_is_https_in_production_for_real_hosts() {
        assert_eq!(
            infer_base_url("shop.example.com", Environment::Production),
            "https://shop.example.com"
        );
        assert_eq!(
            infer_base_url("localhost:8080", Environment::Production),
            "http://localhost:8080"
        );
    }
}
