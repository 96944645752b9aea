//! Stripe API transport.

use std::error::Error as _;

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::{Client, Method};

use stripe_bridge_core::{SecretKey, SessionError};

use crate::options::ClientOptions;
use crate::types::StripeErrorResponse;

/// The calls the orchestrator needs from Stripe.
///
/// [`StripeClient`] is the real implementation.
#[async_trait]
pub trait StripeApi: Send + Sync {
    /// POST a form to `path` and return the body of a 2xx response.
    ///
    /// # Errors
    ///
    /// [`SessionError::Api`] for a non-2xx status, [`SessionError::Network`]
    /// when no response was received.
    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, String)],
        secret: &SecretKey,
    ) -> Result<String, SessionError>;
}

/// Stripe API client.
#[derive(Debug, Clone)]
pub struct StripeClient {
    client: Client,
    base_url: String,
}

impl StripeClient {
    /// Create a client against the production Stripe API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, SessionError> {
        Self::with_options(ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_options(options: ClientOptions) -> Result<Self, SessionError> {
        let client = Client::builder()
            .timeout(options.timeout)
            // A 3xx is an answer to classify, not a hop to follow.
            .redirect(Policy::none())
            .build()
            .map_err(network_error)?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and classify the response.
    ///
    /// For `POST` the form is sent as the body, for other methods as the query
    /// string. Redirects are not followed. The full body is read whatever the
    /// status; 200-299 returns it, anything else becomes [`SessionError::Api`] carrying Stripe's
    /// `error.message`, or the raw body when that cannot be extracted.
    ///
    /// # Errors
    ///
    /// [`SessionError::Api`] for a non-2xx status, [`SessionError::Network`]
    /// for transport failures (connection refused, timeout, malformed URL).
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        form: &[(&str, String)],
        secret: &SecretKey,
    ) -> Result<String, SessionError> {
        let url = format!("{}{}", self.base_url, path);

        let request = self.client.request(method.clone(), url);
        let request = if method == Method::POST {
            request.form(form)
        } else {
            request.query(form)
        };

        let response = request
            .bearer_auth(secret.expose())
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;

        if status.is_success() {
            tracing::trace!(%method, path, status = status.as_u16(), "Stripe request succeeded");
            return Ok(body);
        }

        let message = match serde_json::from_str::<StripeErrorResponse>(&body) {
            Ok(stripe_error) => {
                tracing::warn!(
                    %method,
                    path,
                    status = status.as_u16(),
                    error_type = ?stripe_error.error.error_type,
                    code = ?stripe_error.error.code,
                    "Stripe API returned an error"
                );
                stripe_error.error.message
            }
            Err(_) if body.trim().is_empty() => {
                tracing::warn!(%method, path, status = status.as_u16(), "Stripe API returned an empty error body");
                format!("HTTP {}", status.as_u16())
            }
            Err(_) => {
                tracing::warn!(%method, path, status = status.as_u16(), "Stripe API returned an unparseable error body");
                body
            }
        };

        Err(SessionError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl StripeApi for StripeClient {
    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, String)],
        secret: &SecretKey,
    ) -> Result<String, SessionError> {
        self.send(Method::POST, path, form, secret).await
    }
}

/// Convert a transport error into a message that carries no URL or headers.
fn network_error(err: reqwest::Error) -> SessionError {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    SessionError::Network(message)
}
