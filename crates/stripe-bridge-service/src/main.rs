//! Stripe Bridge - HTTP entry point for createPaymentSession
//!
//! This is the main entry point for the bridge service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stripe_bridge_service::{create_router, AppState, BridgeConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,stripe_bridge=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Stripe Bridge");

    // Load configuration from environment
    let config = BridgeConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        stripe_base_url = %config.stripe_api_base_url,
        inline_price_data = %config.inline_price_data,
        product_name = %config.product_name,
        "Service configuration loaded"
    );

    let state = AppState::new(config.clone())?;
    let app = create_router(state);

    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
