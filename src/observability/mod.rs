//! Observability: structured logging and per-call event sinks.

pub mod events;
pub mod logging;

pub use events::{CallEvent, CallObserver, TracingObserver};
