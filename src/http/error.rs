//! Caller-visible error responses.
//!
//! Single-endpoint routes surface the upstream status code and message
//! unchanged; this type is where a classified upstream failure becomes an
//! HTTP response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::upstream::types::UpstreamError;

/// Error returned to inbound callers as `{"error": <message>}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        let status =
            StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        // Upstream error bodies pass through verbatim; local failures use
        // the error's own description.
        let message = match err {
            UpstreamError::Upstream { message, .. } => message,
            other => other.to_string(),
        };
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
