//! Payment-session request types.

use std::fmt;

use crate::error::SessionError;
use crate::ids::{CustomerId, PriceId};

/// Line-item quantity used when the caller does not supply one.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Stripe secret API key (`sk_test_...` or `sk_live_...`).
///
/// `Debug` is redacted and there is no `Display`, so the key cannot leak
/// through log fields or error formatting.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Wrap a raw secret key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw key, for building the `Authorization` header only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Checkout mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// One-time charge.
    #[default]
    Payment,
    /// Recurring charge tied to an existing price and customer.
    Subscription,
}

impl Mode {
    /// Route a raw mode argument.
    ///
    /// Only the exact string `"subscription"` selects [`Mode::Subscription`];
    /// anything else, including no value at all, is a one-time payment.
    #[must_use]
    pub fn from_arg(value: Option<&str>) -> Self {
        match value {
            Some("subscription") => Self::Subscription,
            _ => Self::Payment,
        }
    }

    /// Value sent as the checkout session's `mode` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `createPaymentSession` request.
///
/// Immutable once built; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    secret_key: SecretKey,
    mode: Mode,
    currency: Option<String>,
    amount: Option<i64>,
    success_url: String,
    cancel_url: Option<String>,
    price_id: Option<PriceId>,
    customer_id: Option<CustomerId>,
    quantity: u32,
}

impl SessionRequest {
    /// Start building a request with the two arguments every flow needs.
    #[must_use]
    pub fn builder(secret_key: SecretKey, success_url: impl Into<String>) -> SessionRequestBuilder {
        SessionRequestBuilder {
            secret_key,
            success_url: success_url.into(),
            mode: Mode::default(),
            currency: None,
            amount: None,
            cancel_url: None,
            price_id: None,
            customer_id: None,
            quantity: None,
        }
    }

    /// Bearer token for every call in the chain.
    #[must_use]
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Selected checkout mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// ISO 4217 currency code, if supplied.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Amount in minor units, if supplied.
    #[must_use]
    pub fn amount(&self) -> Option<i64> {
        self.amount
    }

    /// Redirect target after a completed checkout.
    #[must_use]
    pub fn success_url(&self) -> &str {
        &self.success_url
    }

    /// Redirect target after an abandoned checkout.
    #[must_use]
    pub fn cancel_url(&self) -> Option<&str> {
        self.cancel_url.as_deref()
    }

    /// Existing price, required for subscriptions.
    #[must_use]
    pub fn price_id(&self) -> Option<&PriceId> {
        self.price_id.as_ref()
    }

    /// Existing customer, required for subscriptions.
    #[must_use]
    pub fn customer_id(&self) -> Option<&CustomerId> {
        self.customer_id.as_ref()
    }

    /// Line-item quantity.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Builder for [`SessionRequest`].
#[derive(Debug, Clone)]
#[must_use]
pub struct SessionRequestBuilder {
    secret_key: SecretKey,
    success_url: String,
    mode: Mode,
    currency: Option<String>,
    amount: Option<i64>,
    cancel_url: Option<String>,
    price_id: Option<PriceId>,
    customer_id: Option<CustomerId>,
    quantity: Option<u32>,
}

impl SessionRequestBuilder {
    /// Set the checkout mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the currency code.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Set the amount in minor units.
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the cancel URL.
    pub fn cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }

    /// Set an existing price.
    pub fn price_id(mut self, price_id: impl Into<PriceId>) -> Self {
        self.price_id = Some(price_id.into());
        self
    }

    /// Set an existing customer.
    pub fn customer_id(mut self, customer_id: impl Into<CustomerId>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Set the line-item quantity.
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Validate presence of the always-required arguments and build the request.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidArgument`] if the success URL or the
    /// secret key is empty.
    pub fn build(self) -> Result<SessionRequest, SessionError> {
        if self.success_url.is_empty() {
            return Err(SessionError::invalid_argument(
                "Please specify payment success URL",
            ));
        }
        if self.secret_key.is_empty() {
            return Err(SessionError::invalid_argument("Please specify secret key"));
        }

        Ok(SessionRequest {
            secret_key: self.secret_key,
            mode: self.mode,
            currency: self.currency,
            amount: self.amount,
            success_url: self.success_url,
            cancel_url: self.cancel_url,
            price_id: self.price_id,
            customer_id: self.customer_id,
            quantity: self.quantity.unwrap_or(DEFAULT_QUANTITY),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_key_debug_is_redacted() {
        let key = SecretKey::new("sk_test_abc123");
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("sk_test_abc123"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn request_debug_does_not_leak_secret() {
        let request = SessionRequest::builder(SecretKey::new("sk_test_abc123"), "https://ok")
            .build()
            .unwrap();
        assert!(!format!("{request:?}").contains("sk_test_abc123"));
    }

    #[test]
    fn only_subscription_selects_subscription_mode() {
        assert_eq!(Mode::from_arg(Some("subscription")), Mode::Subscription);
        assert_eq!(Mode::from_arg(Some("payment")), Mode::Payment);
        assert_eq!(Mode::from_arg(Some("setup")), Mode::Payment);
        assert_eq!(Mode::from_arg(Some("Subscription")), Mode::Payment);
        assert_eq!(Mode::from_arg(None), Mode::Payment);
    }

    #[test]
    fn quantity_defaults_to_one() {
        let request = SessionRequest::builder(SecretKey::new("sk_test"), "https://ok")
            .build()
            .unwrap();
        assert_eq!(request.quantity(), DEFAULT_QUANTITY);
        assert_eq!(request.mode(), Mode::Payment);
        assert!(request.cancel_url().is_none());
    }

    #[test]
    fn empty_success_url_is_rejected() {
        let err = SessionRequest::builder(SecretKey::new("sk_test"), "")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::invalid_argument("Please specify payment success URL")
        );
    }

    #[test]
    fn empty_secret_key_is_rejected() {
        let err = SessionRequest::builder(SecretKey::new(""), "https://ok")
            .build()
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidArgument(_)));
    }

    #[test]
    fn builder_sets_optional_fields() {
        let request = SessionRequest::builder(SecretKey::new("sk_test"), "https://ok")
            .mode(Mode::Subscription)
            .currency("usd")
            .amount(1999)
            .cancel_url("https://cancel")
            .price_id("price_1")
            .customer_id("cus_1")
            .quantity(3)
            .build()
            .unwrap();

        assert_eq!(request.currency(), Some("usd"));
        assert_eq!(request.amount(), Some(1999));
        assert_eq!(request.cancel_url(), Some("https://cancel"));
        assert_eq!(request.price_id().map(PriceId::as_str), Some("price_1"));
        assert_eq!(request.customer_id().map(CustomerId::as_str), Some("cus_1"));
        assert_eq!(request.quantity(), 3);
    }
}
