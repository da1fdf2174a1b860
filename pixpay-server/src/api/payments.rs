//! PIX payment initiation.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, header},
    response::IntoResponse,
};
use kanau::processor::Processor;
use pixpay_core::entities::users::{GetUserById, UserRecord};
use pixpay_core::framework::DatabaseProcessor;
use pixpay_core::orders::{Order, OrdersClient, infer_base_url};
use pixpay_core::utils::money::to_minor_units;
use pixpay_sdk::client::GatewayClient;
use pixpay_sdk::objects::transaction::{
    Currency, PaymentMethod, PixOptions, TransactionCustomer, TransactionItem,
    TransactionRequest,
};
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::PixPaymentError;
use super::extractors::AuthToken;
use crate::state::AppState;

/// Successful payment initiation response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    /// The PIX QR-code payload ("copia e cola" string).
    pub pix_code: String,
    /// The order total, unchanged.
    pub amount: Decimal,
}

/// `GET /api/pix-payment/{order_id}` — initiate a PIX charge.
///
/// Fetches the order from the storefront's orders endpoint (forwarding the
/// shopper's session cookie), loads the customer record, and asks the
/// gateway for a QR code. The order total is echoed back untouched; only
/// the gateway payload carries minor units.
pub(super) async fn create_pix_payment(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    Path(order_id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, PixPaymentError> {
    let environment = state.config.server().await.environment;
    let host = match headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
        Some(host) => host.to_owned(),
        None => state.config.server().await.listen.to_string(),
    };
    let base_url = infer_base_url(&host, environment);

    let order = OrdersClient::new(state.http.clone())
        .fetch_order(&base_url, &order_id, &token)
        .await?;

    let processor = DatabaseProcessor {
        pool: state.db.clone(),
    };
    let user = processor
        .process(GetUserById {
            user_id: order.user_id,
        })
        .await?
        .ok_or(PixPaymentError::UserNotFound)?;

    let client_ip = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_owned();

    let payload = build_transaction_request(&order, &user, &order_id, &base_url, client_ip)?;

    let gateway = state.config.gateway().await.clone();
    let credentials = gateway
        .credentials
        .ok_or(PixPaymentError::MissingCredentials)?;
    let client = GatewayClient::new(
        gateway.base_url,
        credentials.public_key,
        credentials.secret_key,
    )
    .with_http_client(state.http.clone());

    tracing::info!(order_id = %order_id, amount = payload.amount, "creating PIX transaction");
    let response = client.create_transaction(&payload).await?;

    let qrcode = response
        .pix
        .map(|p| p.qrcode)
        .ok_or(PixPaymentError::MissingQrCode)?;

    Ok(Json(PaymentResponse {
        pix_code: qrcode,
        amount: order.total,
    }))
}

/// Assemble the gateway payload for an order/customer pair.
///
/// All monetary values are converted to integer minor units here; decimal
/// amounts never reach the wire.
fn build_transaction_request(
    order: &Order,
    user: &UserRecord,
    order_id: &str,
    postback_base: &str,
    client_ip: String,
) -> Result<TransactionRequest, PixPaymentError> {
    let items = order
        .items
        .iter()
        .map(|item| {
            Ok(TransactionItem {
                name: item.name.clone(),
                title: item.name.clone(),
                quantity: item.quantity,
                unit_price: to_minor_units(item.price)?,
                description: item.name.clone(),
                tangible: true,
            })
        })
        .collect::<Result<Vec<_>, PixPaymentError>>()?;

    Ok(TransactionRequest {
        amount: to_minor_units(order.total)?,
        payment_method: PaymentMethod::Pix,
        reference_id: order_id.to_owned(),
        currency: Currency::Brl,
        description: format!("Payment for order #{order_id}"),
        items,
        customer: TransactionCustomer {
            name: user.name.clone(),
            email: user.email.clone(),
        },
        pix: PixOptions::default(),
        postback_url: format!("{postback_base}/api/webhooks/payonhub"),
        external_ref: order_id.to_owned(),
        ip: client_ip,
    })
}
