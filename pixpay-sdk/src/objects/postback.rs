//! Postback payload types for asynchronous transaction status reports.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Payload the gateway POSTs to the configured postback URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostbackPayload {
    /// Gateway-side transaction identifier.
    pub id: CompactString,
    pub status: TransactionStatus,
    /// The `externalRef` supplied when the charge was created.
    #[serde(default)]
    pub external_ref: Option<String>,
    /// Charge amount in minor units.
    #[serde(default)]
    pub amount: Option<i64>,
}

/// Transaction status as reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Paid,
    Refused,
    Refunded,
    Chargeback,
    /// Any status this SDK version does not know about.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Paid => write!(f, "paid"),
            TransactionStatus::Refused => write!(f, "refused"),
            TransactionStatus::Refunded => write!(f, "refunded"),
            TransactionStatus::Chargeback => write!(f, "chargeback"),
            TransactionStatus::Unknown => write!(f, "unknown"),
        }
    }
}
