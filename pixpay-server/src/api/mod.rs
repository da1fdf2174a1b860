//! HTTP API surface.
//!
//! # Endpoints
//!
//! - `GET  /api/pix-payment/{order_id}` – initiate a PIX charge for an order
//! - `POST /api/webhooks/payonhub`      – gateway postback acknowledgment

mod error;
mod extractors;
mod payments;
mod webhooks;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the `/api` router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/pix-payment/{order_id}",
            get(payments::create_pix_payment),
        )
        .route("/webhooks/payonhub", post(webhooks::payonhub_postback))
}
