//! Configuration subsystem: schema, file loading, validation, and the
//! environment-sourced credential.

pub mod credentials;
pub mod loader;
pub mod schema;
pub mod validation;

pub use credentials::{ApiKey, CredentialError};
pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{GatewayConfig, ListenerConfig, TimeoutConfig, UpstreamConfig};
