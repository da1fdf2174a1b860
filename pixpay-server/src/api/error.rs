//! Error surface for the payment API.
//!
//! Every failure leaves the server as JSON `{"error": ..., "details": ...}`.
//! Upstream statuses (orders endpoint, gateway) are relayed; everything
//! unexpected is a 500 with the underlying error text as `details`.

use axum::{Json, http::StatusCode, response::IntoResponse};
use pixpay_core::orders::OrderFetchError;
use pixpay_core::utils::money::MoneyError;
use pixpay_sdk::client::ClientError;
use serde::Serialize;

/// JSON error body shared by all failure responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Everything that can go wrong while initiating a PIX charge.
#[derive(Debug, thiserror::Error)]
pub enum PixPaymentError {
    /// No `token` cookie on the request.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The order lookup failed.
    #[error(transparent)]
    OrderFetch(#[from] OrderFetchError),

    /// The order references a user that does not exist.
    #[error("User not found")]
    UserNotFound,

    /// PayOnHub credentials are missing from the environment.
    #[error("PayOnHub credentials are missing")]
    MissingCredentials,

    /// The gateway answered with an error status; relay it.
    #[error("gateway refused the transaction with status {status}")]
    Gateway {
        status: StatusCode,
        body: serde_json::Value,
    },

    /// The gateway accepted the charge but the reply had no QR code.
    #[error("gateway response is missing the PIX QR code")]
    MissingQrCode,

    /// Monetary conversion failed.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// A database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else.
    #[error("{0}")]
    Internal(String),
}

impl From<ClientError> for PixPaymentError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api { status, body } => Self::Gateway { status, body },
            other => Self::Internal(other.to_string()),
        }
    }
}

fn internal_error(details: impl Into<serde_json::Value>) -> (StatusCode, ErrorBody) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorBody {
            error: "Internal server error".to_owned(),
            details: Some(details.into()),
        },
    )
}

impl IntoResponse for PixPaymentError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            PixPaymentError::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    error: "Not authenticated".to_owned(),
                    details: None,
                },
            ),
            PixPaymentError::OrderFetch(OrderFetchError::Upstream { status, message }) => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                ErrorBody {
                    error: message,
                    details: None,
                },
            ),
            PixPaymentError::OrderFetch(err) => {
                tracing::error!(error = %err, "order lookup failed");
                internal_error(err.to_string())
            }
            PixPaymentError::UserNotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "User not found".to_owned(),
                    details: None,
                },
            ),
            PixPaymentError::MissingCredentials => {
                tracing::error!("PayOnHub credentials are missing");
                internal_error("PayOnHub credentials are missing")
            }
            PixPaymentError::Gateway { status, body } => {
                tracing::error!(status = %status, "gateway refused the transaction");
                let error = body
                    .get("error")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Failed to create PIX transaction")
                    .to_owned();
                (
                    status,
                    ErrorBody {
                        error,
                        details: Some(body),
                    },
                )
            }
            PixPaymentError::MissingQrCode => {
                tracing::error!("gateway response is missing the PIX QR code");
                internal_error("gateway response is missing the PIX QR code")
            }
            PixPaymentError::Money(err) => {
                tracing::error!(error = %err, "monetary conversion failed");
                internal_error(err.to_string())
            }
            PixPaymentError::Database(err) => {
                tracing::error!(error = %err, "database error during payment initiation");
                internal_error(err.to_string())
            }
            PixPaymentError::Internal(message) => {
                tracing::error!(error = %message, "error creating PIX transaction");
                internal_error(message)
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_token_maps_to_401() {
        let response = PixPaymentError::NotAuthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Not authenticated");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn upstream_order_error_relays_status_and_message() {
        let response = PixPaymentError::OrderFetch(OrderFetchError::Upstream {
            status: 404,
            message: "Order not found".to_owned(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Order not found");
    }

    #[tokio::test]
    async fn non_json_upstream_reply_maps_to_500() {
        let response = PixPaymentError::OrderFetch(OrderFetchError::UnexpectedContentType {
            content_type: "text/html".to_owned(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert!(body["details"].as_str().is_some());
    }

    #[tokio::test]
    async fn unknown_user_maps_to_404() {
        let response = PixPaymentError::UserNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn gateway_error_relays_status_and_payload() {
        let gateway_body = serde_json::json!({"error": "invalid amount", "code": 422});
        let response = PixPaymentError::Gateway {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: gateway_body.clone(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid amount");
        assert_eq!(body["details"], gateway_body);
    }

    #[tokio::test]
    async fn gateway_error_without_message_gets_a_default() {
        let response = PixPaymentError::Gateway {
            status: StatusCode::BAD_REQUEST,
            body: serde_json::json!({"code": 400}),
        }
        .into_response();
        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to create PIX transaction");
    }

    #[tokio::test]
    async fn missing_credentials_map_to_500() {
        let response = PixPaymentError::MissingCredentials.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["details"], "PayOnHub credentials are missing");
    }
}
