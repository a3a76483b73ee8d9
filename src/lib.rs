//! Ave.ai API gateway library.
//!
//! A thin HTTP gateway that republishes the Ave.ai v2 cryptocurrency REST
//! API under local routes: one upstream round trip per logical operation
//! (three for the composite routes), with the upstream `data` envelope
//! stripped and list payloads optionally truncated before the response
//! goes back out.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod normalize;
pub mod observability;
pub mod upstream;

pub use config::{ApiKey, GatewayConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::{UpstreamClient, UpstreamError, UpstreamResult};
