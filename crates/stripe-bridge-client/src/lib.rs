//! Stripe checkout-session client.
//!
//! This crate turns a single `createPaymentSession` request into the chain of
//! Stripe REST calls that produces a checkout URL:
//!
//! - [`StripeClient`] issues form-encoded requests and normalizes errors
//! - [`SessionOrchestrator`] runs the product → price → checkout chain
//! - [`Dispatcher`] parses positional arguments and runs the chain on a
//!   background task, delivering exactly one outcome
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use stripe_bridge_client::{
//!     ClientOptions, Dispatcher, SessionOptions, SessionOrchestrator, StripeClient,
//! };
//!
//! # async fn example() -> Result<(), stripe_bridge_core::SessionError> {
//! let client = StripeClient::with_options(ClientOptions::default())?;
//! let dispatcher = Dispatcher::new(SessionOrchestrator::new(client, SessionOptions::default()));
//!
//! let pending = dispatcher
//!     .execute(
//!         "createPaymentSession",
//!         &[
//!             json!("sk_test_..."),
//!             json!("payment"),
//!             json!("usd"),
//!             json!(1999),
//!             json!("https://example.com/success"),
//!         ],
//!     )
//!     .expect("action is handled");
//!
//! let url = pending.await?;
//! println!("Checkout URL: {url}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod dispatch;
mod http;
mod options;
mod orchestrator;
mod parse;
mod types;

pub use dispatch::{parse_session_args, Dispatcher, PendingSession, CREATE_PAYMENT_SESSION};
pub use http::{StripeApi, StripeClient};
pub use options::{ClientOptions, SessionOptions, DEFAULT_PRODUCT_NAME};
pub use orchestrator::SessionOrchestrator;
pub use parse::extract_field;
pub use stripe_bridge_core::{Outcome, SessionError};
