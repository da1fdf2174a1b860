//! Custom Axum extractors for request authentication.
//!
//! The storefront authenticates shoppers with a `token` cookie set at
//! sign-in; handlers take [`AuthToken`] to require it and to forward it
//! upstream on same-host calls.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use crate::api::error::PixPaymentError;
use crate::state::AppState;

/// The shopper's session token, read from the `token` cookie.
pub struct AuthToken(pub String);

impl FromRequestParts<AppState> for AuthToken {
    type Rejection = PixPaymentError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        match jar.get("token") {
            Some(cookie) => Ok(AuthToken(cookie.value().to_owned())),
            None => {
                tracing::warn!("request without token cookie");
                Err(PixPaymentError::NotAuthenticated)
            }
        }
    }
}
