//! Stripe bridge HTTP service.
//!
//! Host applications that cannot link the client crate directly post the same
//! `{action, args}` pair a hybrid-app plugin bridge would pass, and get back
//! the checkout URL or a single error message.
//!
//! # Routes
//!
//! - `GET /health` - Health check
//! - `POST /v1/exec` - Execute a named action (`createPaymentSession`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Axum handlers must be async

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::BridgeConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
