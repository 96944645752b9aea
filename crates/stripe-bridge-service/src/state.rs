//! Application state.

use stripe_bridge_client::{Dispatcher, SessionOrchestrator, StripeClient};
use stripe_bridge_core::SessionError;

use crate::config::BridgeConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: BridgeConfig,

    /// Dispatcher for named actions.
    pub dispatcher: Dispatcher<StripeClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the Stripe HTTP client cannot be built.
    pub fn new(config: BridgeConfig) -> Result<Self, SessionError> {
        let client = StripeClient::with_options(config.client_options())?;
        let orchestrator = SessionOrchestrator::new(client, config.session_options());

        tracing::info!(
            stripe_base_url = %config.stripe_api_base_url,
            inline_price_data = config.inline_price_data,
            "Stripe dispatcher ready"
        );

        Ok(Self {
            config,
            dispatcher: Dispatcher::new(orchestrator),
        })
    }
}
