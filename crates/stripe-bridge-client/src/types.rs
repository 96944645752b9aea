//! Stripe API wire types.

use serde::Deserialize;

/// Stripe error envelope: `{"error": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StripeErrorResponse {
    pub error: StripeErrorBody,
}

/// Stripe error details.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StripeErrorBody {
    /// Human-readable message surfaced to the caller.
    pub message: String,
    /// Error type (`card_error`, `invalid_request_error`, ...).
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
}
