//! Error types for stripe-bridge.

use std::fmt;

use crate::ids::CheckoutUrl;

/// Terminal result of a `createPaymentSession` invocation.
///
/// Exactly one outcome is produced per request.
pub type Outcome = std::result::Result<CheckoutUrl, SessionError>;

/// The remote call a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `POST /products`.
    Product,
    /// `POST /prices`.
    Price,
    /// `POST /checkout/sessions` in payment mode.
    PaymentLink,
    /// `POST /checkout/sessions` in subscription mode.
    SubscriptionLink,
}

impl Step {
    /// Human-readable name used in error messages and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Price => "price",
            Self::PaymentLink => "payment link",
            Self::SubscriptionLink => "subscription link",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can end a payment-session request.
///
/// Every variant is terminal for the current invocation. The `Display` output
/// is the message handed back to the caller, so it never contains the secret key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A required argument is missing or has the wrong type.
    #[error("{0}")]
    InvalidArgument(String),

    /// Stripe answered with a non-2xx status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Provider's `error.message`, or the raw body when that is not parseable.
        message: String,
    },

    /// Stripe answered 2xx but the expected field was missing or the body was not JSON.
    #[error("Failed to create {step}: {reason}")]
    MalformedResponse {
        /// The call whose response could not be read.
        step: Step,
        /// What was wrong with the body.
        reason: String,
    },

    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),
}

impl SessionError {
    /// Shorthand for [`SessionError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Stable machine-readable code for the error category.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Api { .. } => "api_error",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::Network(_) => "network_error",
        }
    }
}
