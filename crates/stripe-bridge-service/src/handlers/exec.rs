//! Action execution handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use stripe_bridge_core::SessionError;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body: an action name and its positional arguments.
#[derive(Debug, Deserialize)]
pub struct ExecRequest {
    /// Action name, e.g. `createPaymentSession`.
    pub action: String,
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Response body for every outcome.
#[derive(Debug, Serialize)]
pub struct ExecResponse {
    /// `ok`, `error` or `unhandled`.
    pub status: &'static str,
    /// Error category for failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    /// Checkout URL on success, otherwise the error message.
    pub message: String,
}

impl ExecResponse {
    /// Successful outcome.
    #[must_use]
    pub fn ok(message: String) -> Self {
        Self {
            status: "ok",
            code: None,
            message,
        }
    }

    /// Failed outcome.
    #[must_use]
    pub fn error(err: &SessionError) -> Self {
        Self {
            status: "error",
            code: Some(err.code()),
            message: err.to_string(),
        }
    }

    /// Action not handled.
    #[must_use]
    pub fn unhandled(message: String) -> Self {
        Self {
            status: "unhandled",
            code: None,
            message,
        }
    }
}

/// Execute an action and wait for its single outcome.
///
/// POST /v1/exec
///
/// A body that is not an [`ExecRequest`] is an invalid argument, reported in
/// the same envelope as every other failure.
pub async fn exec(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ExecRequest>, JsonRejection>,
) -> Result<Json<ExecResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| SessionError::invalid_argument(rejection.body_text()))?;

    let pending = state
        .dispatcher
        .execute(&request.action, &request.args)
        .ok_or_else(|| ApiError::Unhandled(request.action.clone()))?;

    tracing::debug!(
        action = %request.action,
        invocation_id = %pending.invocation_id(),
        "Dispatched action"
    );

    let url = pending.await?;
    Ok(Json(ExecResponse::ok(url.into_inner())))
}
