//! Upstream API access: one classified round trip per call.

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{UpstreamError, UpstreamResult};
