//! Inbound HTTP layer: router, handlers, parameter validation, and error
//! mapping.

pub mod error;
pub mod handlers;
pub mod params;
pub mod request;
pub mod server;

pub use server::{AppState, HttpServer};
