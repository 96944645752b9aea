//! Common test utilities for stripe-bridge integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;
use serde_json::{json, Value};
use wiremock::MockServer;

use stripe_bridge_service::{create_router, AppState, BridgeConfig};

/// Secret key used by test requests.
pub const SECRET: &str = "sk_test_bridge_harness";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Mock Stripe API the bridge talks to.
    pub stripe: MockServer,
}

impl TestHarness {
    /// Create a harness with default session options.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a harness, letting the caller adjust the configuration.
    pub async fn with_config(adjust: impl FnOnce(&mut BridgeConfig)) -> Self {
        let stripe = MockServer::start().await;

        let mut config = BridgeConfig {
            listen_addr: "127.0.0.1:0".into(),
            stripe_api_base_url: format!("{}/v1", stripe.uri()),
            stripe_timeout_seconds: 5,
            ..BridgeConfig::default()
        };
        adjust(&mut config);

        let state = AppState::new(config).expect("Failed to build app state");
        let router: Router = create_router(state);
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, stripe }
    }

    /// Requests the mock Stripe API has received.
    pub async fn stripe_requests(&self) -> Vec<wiremock::Request> {
        self.stripe
            .received_requests()
            .await
            .expect("request recording is enabled")
    }
}

/// Exec body for a one-time payment.
pub fn payment_exec() -> Value {
    json!({
        "action": "createPaymentSession",
        "args": [SECRET, "payment", "usd", 2500, "https://shop.example/success"]
    })
}

/// Exec body for a subscription.
pub fn subscription_exec() -> Value {
    json!({
        "action": "createPaymentSession",
        "args": [
            SECRET,
            "subscription",
            null,
            null,
            "https://shop.example/success",
            null,
            "price_sub",
            "cus_missing"
        ]
    })
}
