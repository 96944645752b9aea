//! Client and session options.

use std::time::Duration;

/// Product name used when the one-time payment flow creates its own product.
pub const DEFAULT_PRODUCT_NAME: &str = "PayProduct";

/// HTTP client options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Base URL all paths are appended to (default: `https://api.stripe.com/v1`).
    pub base_url: String,
    /// Per-request timeout (default: 30 seconds).
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "https://api.stripe.com/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientOptions {
    /// Override the base URL, e.g. to point at a mock server.
    ///
    /// A trailing slash is removed so paths can always start with `/`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Options that shape the one-time payment flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Send price data inline on the checkout session instead of creating a
    /// product and a price first (default: `false`).
    pub inline_price_data: bool,
    /// Name given to the product (or inline product data) of one-time payments
    /// (default: `"PayProduct"`).
    pub product_name: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            inline_price_data: false,
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
        }
    }
}

impl SessionOptions {
    /// Toggle inline price data.
    #[must_use]
    pub fn with_inline_price_data(mut self, inline: bool) -> Self {
        self.inline_price_data = inline;
        self
    }

    /// Set the product name.
    #[must_use]
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }
}
