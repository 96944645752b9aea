//! Service configuration.

use std::time::Duration;

use stripe_bridge_client::{ClientOptions, SessionOptions, DEFAULT_PRODUCT_NAME};

/// Service configuration loaded from environment variables.
///
/// The Stripe secret key is not part of it: every request carries its own.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Stripe API base URL (default: `https://api.stripe.com/v1`).
    pub stripe_api_base_url: String,

    /// Timeout for each Stripe call in seconds (default: 30).
    pub stripe_timeout_seconds: u64,

    /// Create one-time payments with inline price data (default: false).
    pub inline_price_data: bool,

    /// Product name for one-time payments (default: "PayProduct").
    pub product_name: String,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds for routes other than `/v1/exec`.
    ///
    /// An exec request is not cut short; each of its Stripe calls is bounded
    /// by `stripe_timeout_seconds`.
    pub request_timeout_seconds: u64,
}

impl BridgeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            stripe_api_base_url: std::env::var("STRIPE_API_BASE_URL")
                .unwrap_or(defaults.stripe_api_base_url),
            stripe_timeout_seconds: std::env::var("STRIPE_REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.stripe_timeout_seconds),
            inline_price_data: std::env::var("STRIPE_INLINE_PRICE_DATA")
                .ok()
                .map_or(defaults.inline_price_data, |s| parse_flag(&s)),
            product_name: std::env::var("STRIPE_PRODUCT_NAME")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.product_name),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_seconds),
        }
    }

    /// HTTP client options derived from this configuration.
    #[must_use]
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions::default()
            .with_base_url(self.stripe_api_base_url.clone())
            .with_timeout(Duration::from_secs(self.stripe_timeout_seconds))
    }

    /// Session options derived from this configuration.
    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions::default()
            .with_inline_price_data(self.inline_price_data)
            .with_product_name(self.product_name.clone())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            stripe_api_base_url: ClientOptions::default().base_url,
            stripe_timeout_seconds: 30,
            inline_price_data: false,
            product_name: DEFAULT_PRODUCT_NAME.into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 60,
        }
    }
}

/// Accept the usual spellings of a true boolean flag.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
