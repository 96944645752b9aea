//! Core types for stripe-bridge.
//!
//! This crate provides the data model shared by the client and the host service:
//!
//! - **Requests**: `SessionRequest`, `Mode`, `SecretKey`
//! - **Resource references**: `ProductId`, `PriceId`, `CustomerId`, `CheckoutUrl`
//! - **Errors**: `SessionError`, `Step`
//! - **Outcome**: the single terminal result of a `createPaymentSession` call
//!
//! # Amounts
//!
//! Amounts are integers in the currency's minor unit (cents for `usd`), the
//! same unit Stripe's `unit_amount` expects.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod request;

pub use error::{Outcome, SessionError, Step};
pub use ids::{CheckoutUrl, CustomerId, PriceId, ProductId};
pub use request::{Mode, SecretKey, SessionRequest, SessionRequestBuilder, DEFAULT_QUANTITY};
