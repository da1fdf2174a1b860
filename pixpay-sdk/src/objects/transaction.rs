//! Request and response types for the PayOnHub `/v1/transactions` endpoint.
//!
//! All monetary fields are integer minor units (centavos); converting from
//! decimal currency happens before these types are built.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::postback::TransactionStatus;

/// Default PIX charge lifetime, in seconds.
pub const PIX_EXPIRATION_SECS: u32 = 3600;

/// Request payload for creating a PIX transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Charge amount in minor units.
    pub amount: i64,
    pub payment_method: PaymentMethod,
    /// Merchant-side identifier, echoed back in postbacks.
    pub reference_id: String,
    pub currency: Currency,
    pub description: String,
    pub items: Vec<TransactionItem>,
    pub customer: TransactionCustomer,
    pub pix: PixOptions,
    /// URL the gateway calls to report status changes.
    pub postback_url: String,
    pub external_ref: String,
    /// Client IP as seen by the caller, `"unknown"` when absent.
    pub ip: String,
}

/// Supported payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Pix,
}

/// Settlement currencies accepted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "BRL")]
    Brl,
}

/// A single charged line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionItem {
    pub name: String,
    pub title: String,
    pub quantity: u32,
    /// Per-unit price in minor units.
    pub unit_price: i64,
    pub description: String,
    pub tangible: bool,
}

/// Customer block attached to the charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCustomer {
    pub name: CompactString,
    pub email: CompactString,
}

/// PIX-specific charge options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixOptions {
    /// Seconds until the QR code expires.
    pub expiration: u32,
}

impl Default for PixOptions {
    fn default() -> Self {
        Self {
            expiration: PIX_EXPIRATION_SECS,
        }
    }
}

/// Response returned by the transactions endpoint on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    #[serde(default)]
    pub id: Option<CompactString>,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    #[serde(default)]
    pub pix: Option<PixDetail>,
}

/// PIX charge details within a transaction response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixDetail {
    /// The QR-code payload ("copia e cola" string).
    pub qrcode: String,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> TransactionRequest {
        TransactionRequest {
            amount: 1999,
            payment_method: PaymentMethod::Pix,
            reference_id: "ord_123".to_owned(),
            currency: Currency::Brl,
            description: "Payment for order #ord_123".to_owned(),
            items: vec![TransactionItem {
                name: "Coffee beans".to_owned(),
                title: "Coffee beans".to_owned(),
                quantity: 2,
                unit_price: 999,
                description: "Coffee beans".to_owned(),
                tangible: true,
            }],
            customer: TransactionCustomer {
                name: CompactString::from("Ana Souza"),
                email: CompactString::from("ana@example.com"),
            },
            pix: PixOptions::default(),
            postback_url: "https://shop.example.com/api/webhooks/payonhub".to_owned(),
            external_ref: "ord_123".to_owned(),
            ip: "203.0.113.7".to_owned(),
        }
    }

    #[test]
    fn request_serializes_to_gateway_wire_format() {
        let value = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(value["amount"], 1999);
        assert_eq!(value["paymentMethod"], "pix");
        assert_eq!(value["currency"], "BRL");
        assert_eq!(value["referenceId"], "ord_123");
        assert_eq!(value["pix"]["expiration"], 3600);
        assert_eq!(value["items"][0]["unitPrice"], 999);
        assert_eq!(value["items"][0]["tangible"], true);
        assert_eq!(value["customer"]["email"], "ana@example.com");
        assert_eq!(value["postbackUrl"], "https://shop.example.com/api/webhooks/payonhub");
        assert_eq!(value["externalRef"], "ord_123");
        assert_eq!(value["ip"], "203.0.113.7");
    }

    #[test]
    fn response_parses_qrcode() {
        let body = r#"{"id":"txn_9","status":"pending","pix":{"qrcode":"000201010212..."}}"#;
        let response: TransactionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status, Some(TransactionStatus::Pending));
        assert_eq!(
            response.pix.map(|p| p.qrcode),
            Some("000201010212...".to_owned())
        );
    }

    #[test]
    fn response_tolerates_missing_pix_block() {
        let response: TransactionResponse = serde_json::from_str(r#"{"id":"txn_9"}"#).unwrap();
        assert!(response.pix.is_none());
        assert!(response.status.is_none());
    }
}
