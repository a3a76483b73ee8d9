//! Upstream call outcomes and error definitions.

use serde_json::Value;
use thiserror::Error;

/// Classified outcome of exactly one upstream round trip.
///
/// Every call produces one of these; the client never raises past its own
/// boundary. `Failure` carries the upstream-reported status when a response
/// was received, otherwise the local default of 500.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamResult {
    /// Upstream answered with a 2xx/3xx status and a valid JSON body.
    Success { status: u16, payload: Value },
    /// Transport failure, upstream error status, or a non-JSON success body.
    Failure { status: u16, message: String },
}

impl UpstreamResult {
    /// The HTTP status associated with this outcome.
    pub fn status(&self) -> u16 {
        match self {
            UpstreamResult::Success { status, .. } => *status,
            UpstreamResult::Failure { status, .. } => *status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UpstreamResult::Success { .. })
    }
}

/// Errors that can occur while talking to the upstream API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UpstreamError {
    /// Network-level failure (DNS, timeout, reset) before any response.
    #[error("upstream unreachable: {0}")]
    Transport(String),

    /// Upstream responded with status >= 400. Status and body are preserved
    /// verbatim for diagnosability.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Upstream answered below 400 but the body was not valid JSON.
    /// A contract violation on their side, surfaced as a 500.
    #[error("upstream sent a non-JSON body: {0}")]
    MalformedResponse(String),
}

impl UpstreamError {
    /// The status this error maps to at the local boundary.
    pub fn status(&self) -> u16 {
        match self {
            UpstreamError::Upstream { status, .. } => *status,
            UpstreamError::Transport(_) | UpstreamError::MalformedResponse(_) => 500,
        }
    }

    /// Fold this error into the classified result the client hands back.
    pub fn into_failure(self) -> UpstreamResult {
        match self {
            UpstreamError::Upstream { status, message } => {
                UpstreamResult::Failure { status, message }
            }
            other => UpstreamResult::Failure {
                status: 500,
                message: other.to_string(),
            },
        }
    }
}
