//! Named-action dispatch.
//!
//! The host hands over an action name and a positional argument list, the
//! same shape a hybrid-app plugin bridge uses. Handled actions run on one
//! background task and report through a [`PendingSession`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use serde_json::Value;
use tokio::sync::oneshot;
use tracing::Instrument;
use uuid::Uuid;

use stripe_bridge_core::{Mode, Outcome, SecretKey, SessionError, SessionRequest};

use crate::http::StripeApi;
use crate::orchestrator::SessionOrchestrator;

/// The one action this dispatcher handles.
pub const CREATE_PAYMENT_SESSION: &str = "createPaymentSession";

// Positional argument layout of `createPaymentSession`.
const ARG_SECRET_KEY: usize = 0;
const ARG_MODE: usize = 1;
const ARG_CURRENCY: usize = 2;
const ARG_AMOUNT: usize = 3;
const ARG_SUCCESS_URL: usize = 4;
const ARG_CANCEL_URL: usize = 5;
const ARG_PRICE_ID: usize = 6;
const ARG_CUSTOMER_ID: usize = 7;
const ARG_QUANTITY: usize = 8;

/// Routes named actions to the session orchestrator.
#[derive(Debug)]
pub struct Dispatcher<A> {
    orchestrator: Arc<SessionOrchestrator<A>>,
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            orchestrator: Arc::clone(&self.orchestrator),
        }
    }
}

impl<A: StripeApi + 'static> Dispatcher<A> {
    /// Create a dispatcher that owns the orchestrator.
    #[must_use]
    pub fn new(orchestrator: SessionOrchestrator<A>) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }

    /// Execute a named action.
    ///
    /// Returns `None` for an action this dispatcher does not handle; nothing
    /// is spawned in that case. Otherwise the arguments are parsed, the call
    /// chain is started on a single spawned task, and the returned
    /// [`PendingSession`] resolves to its one outcome. Argument errors resolve
    /// immediately without any HTTP call.
    ///
    /// Dropping the [`PendingSession`] does not cancel the chain.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn execute(&self, action: &str, args: &[Value]) -> Option<PendingSession> {
        if action != CREATE_PAYMENT_SESSION {
            tracing::debug!(action, "Unhandled action");
            return None;
        }

        let invocation_id = Uuid::new_v4();
        let (tx, rx) = oneshot::channel();

        match parse_session_args(args) {
            Ok(request) => {
                let span = tracing::info_span!(
                    "create_payment_session",
                    %invocation_id,
                    mode = %request.mode()
                );
                let orchestrator = Arc::clone(&self.orchestrator);

                tokio::spawn(
                    async move {
                        let outcome = orchestrator.run(&request).await;
                        // The receiver may already be dropped.
                        let _ = tx.send(outcome);
                    }
                    .instrument(span),
                );
            }
            Err(e) => {
                tracing::warn!(%invocation_id, error = %e, "Rejected createPaymentSession arguments");
                let _ = tx.send(Err(e));
            }
        }

        Some(PendingSession { invocation_id, rx })
    }
}

/// Future resolving to the single outcome of a dispatched request.
#[derive(Debug)]
#[must_use = "a pending session does nothing unless awaited"]
pub struct PendingSession {
    invocation_id: Uuid,
    rx: oneshot::Receiver<Outcome>,
}

impl PendingSession {
    /// Identifier recorded on the request's tracing span.
    #[must_use]
    pub fn invocation_id(&self) -> Uuid {
        self.invocation_id
    }
}

impl Future for PendingSession {
    type Output = Outcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|received| {
            received.unwrap_or_else(|_| {
                Err(SessionError::Network(
                    "session task ended without a result".to_string(),
                ))
            })
        })
    }
}

/// Parse the positional arguments of `createPaymentSession`.
///
/// Layout: secret key, mode, currency, amount, success URL, then the optional
/// cancel URL, price ID, customer ID and quantity. Missing positions, JSON
/// `null` and empty strings count as absent.
///
/// # Errors
///
/// Returns [`SessionError::InvalidArgument`] if the success URL or secret key
/// is absent, or an argument has the wrong JSON type.
pub fn parse_session_args(args: &[Value]) -> Result<SessionRequest, SessionError> {
    let success_url = string_arg(args, ARG_SUCCESS_URL, "success URL")?.ok_or_else(|| {
        SessionError::invalid_argument("Please specify payment success URL")
    })?;
    let secret_key = string_arg(args, ARG_SECRET_KEY, "secret key")?
        .ok_or_else(|| SessionError::invalid_argument("Please specify secret key"))?;

    let mode = Mode::from_arg(args.get(ARG_MODE).and_then(Value::as_str));
    let mut builder = SessionRequest::builder(SecretKey::new(secret_key), success_url).mode(mode);

    if let Some(currency) = string_arg(args, ARG_CURRENCY, "currency")? {
        builder = builder.currency(currency);
    }
    if let Some(amount) = integer_arg(args, ARG_AMOUNT, "amount")? {
        builder = builder.amount(amount);
    }
    if let Some(cancel_url) = string_arg(args, ARG_CANCEL_URL, "cancel URL")? {
        builder = builder.cancel_url(cancel_url);
    }
    if let Some(price_id) = string_arg(args, ARG_PRICE_ID, "price ID")? {
        builder = builder.price_id(price_id);
    }
    if let Some(customer_id) = string_arg(args, ARG_CUSTOMER_ID, "customer ID")? {
        builder = builder.customer_id(customer_id);
    }
    if let Some(quantity) = integer_arg(args, ARG_QUANTITY, "quantity")? {
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| {
                SessionError::invalid_argument(format!(
                    "quantity must be a positive integer, got {quantity}"
                ))
            })?;
        builder = builder.quantity(quantity);
    }

    builder.build()
}

fn string_arg(args: &[Value], index: usize, name: &str) -> Result<Option<String>, SessionError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SessionError::invalid_argument(format!(
            "{name} must be a string"
        ))),
    }
}

/// Integers may also arrive as numeric strings from loosely typed callers.
fn integer_arg(args: &[Value], index: usize, name: &str) -> Result<Option<i64>, SessionError> {
    let invalid = |value: &Value| {
        SessionError::invalid_argument(format!("{name} must be an integer, got {value}"))
    };

    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::Number(n)) => n.as_i64().map(Some).ok_or_else(|| invalid(value)),
        Some(value @ Value::String(s)) => s.trim().parse::<i64>().map(Some).map_err(|_| invalid(value)),
        Some(other) => Err(invalid(other)),
    }
}
