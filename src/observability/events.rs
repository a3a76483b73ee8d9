//! Per-call observability events.
//!
//! The upstream client reports every completed round trip to an injectable
//! sink instead of printing anywhere itself. Production uses the
//! tracing-backed default; tests can inject a recording sink.

use std::time::Duration;

use reqwest::Method;

/// A completed upstream call, as seen by the sink.
#[derive(Debug)]
pub struct CallEvent<'a> {
    /// Logical operation name supplied by the route layer.
    pub operation: &'a str,
    pub method: &'a Method,
    /// Upstream path, without base or query.
    pub path: &'a str,
    /// Classified outcome status (local 500 for transport failures).
    pub status: u16,
    pub duration: Duration,
}

/// Sink for upstream call events.
pub trait CallObserver: Send + Sync {
    fn on_call(&self, event: &CallEvent<'_>);
}

/// Default sink: one structured tracing event per call.
pub struct TracingObserver;

impl CallObserver for TracingObserver {
    fn on_call(&self, event: &CallEvent<'_>) {
        tracing::debug!(
            operation = event.operation,
            method = %event.method,
            path = event.path,
            status = event.status,
            duration_ms = event.duration.as_millis() as u64,
            "Upstream call completed"
        );
    }
}
