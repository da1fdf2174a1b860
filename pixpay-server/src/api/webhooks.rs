//! Gateway postback (webhook) endpoint.
//!
//! PayOnHub reports asynchronous status changes here. Payment state is
//! owned upstream, so the endpoint only acknowledges and logs the event.

use axum::{Json, http::StatusCode, response::IntoResponse};
use pixpay_sdk::objects::postback::PostbackPayload;

/// `POST /api/webhooks/payonhub` — acknowledge a gateway postback.
pub(super) async fn payonhub_postback(Json(payload): Json<PostbackPayload>) -> impl IntoResponse {
    tracing::info!(
        transaction_id = %payload.id,
        status = %payload.status,
        external_ref = payload.external_ref.as_deref().unwrap_or("-"),
        "received PayOnHub postback"
    );
    StatusCode::OK
}
