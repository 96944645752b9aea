//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use stripe_bridge_core::SessionError;

use crate::handlers::exec::ExecResponse;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The action name is not one this bridge handles.
    #[error("unknown action: {0}")]
    Unhandled(String),

    /// The dispatched request ended in failure.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Unhandled(_) => (
                StatusCode::NOT_FOUND,
                ExecResponse::unhandled(self.to_string()),
            ),
            Self::Session(err) => {
                let status = match err {
                    SessionError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                    SessionError::Api { .. } | SessionError::MalformedResponse { .. } => {
                        StatusCode::BAD_GATEWAY
                    }
                    SessionError::Network(_) => StatusCode::GATEWAY_TIMEOUT,
                };
                (status, ExecResponse::error(err))
            }
        };

        (status, Json(body)).into_response()
    }
}
