//! Shared helpers for tests that run against a mock Stripe server.

#![allow(dead_code)] // Some helpers are used by different test files

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stripe_bridge_client::{
    ClientOptions, Dispatcher, SessionOptions, SessionOrchestrator, StripeClient,
};

/// Secret key used by every test request.
pub const SECRET: &str = "sk_test_4eC39HqLyjWDarjtT1zdp7dc";

/// Build a dispatcher pointed at the mock server.
pub fn dispatcher(server: &MockServer, options: SessionOptions) -> Dispatcher<StripeClient> {
    let client = StripeClient::with_options(
        ClientOptions::default().with_base_url(format!("{}/v1", server.uri())),
    )
    .expect("Failed to create Stripe client");
    Dispatcher::new(SessionOrchestrator::new(client, options))
}

/// Positional arguments for a one-time payment without a cancel URL.
pub fn payment_args() -> Vec<Value> {
    vec![
        json!(SECRET),
        json!("payment"),
        json!("usd"),
        json!(1999),
        json!("https://shop.example/success"),
    ]
}

/// Positional arguments for a subscription.
pub fn subscription_args() -> Vec<Value> {
    vec![
        json!(SECRET),
        json!("subscription"),
        json!("usd"),
        json!(0),
        json!("https://shop.example/success"),
        json!("https://shop.example/cancel"),
        json!("price_sub"),
        json!("cus_123"),
        json!(2),
    ]
}

/// Mount a mock answering `POST /v1<route>` once with the given status and body.
pub async fn mount_post(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/v1{route}")))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a mock that must never be hit.
pub async fn mount_never(server: &MockServer, route: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/v1{route}")))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// Mount the three successful responses of the product → price → session chain.
pub async fn mount_successful_chain(server: &MockServer) {
    mount_post(server, "/products", 200, json!({ "id": "prod_1", "object": "product" })).await;
    mount_post(server, "/prices", 200, json!({ "id": "price_1", "object": "price" })).await;
    mount_post(
        server,
        "/checkout/sessions",
        200,
        json!({ "id": "cs_1", "object": "checkout.session", "url": "https://pay.example/cs_1" }),
    )
    .await;
}

/// Requests the mock server has seen, in arrival order.
pub async fn received(server: &MockServer) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
}

/// Decode an `application/x-www-form-urlencoded` body into `(key, value)` pairs.
pub fn form_pairs(body: &[u8]) -> Vec<(String, String)> {
    let body = String::from_utf8_lossy(body);
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    urlencoding::decode(&raw.replace('+', " "))
        .expect("valid percent-encoding")
        .into_owned()
}

/// Value of a form key, if present.
pub fn form_value(body: &[u8], key: &str) -> Option<String> {
    form_pairs(body)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}
