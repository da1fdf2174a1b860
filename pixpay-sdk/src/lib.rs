//! SDK for the PayOnHub payments gateway.
//!
//! Wire types for the `/v1/transactions` API and the asynchronous postback
//! payloads, plus an optional typed HTTP client (enable the `client` cargo
//! feature).

pub mod objects;

#[cfg(feature = "client")]
pub mod client;
