//! API credential handling.
//!
//! The upstream API key comes exclusively from the process environment at
//! startup. It never appears in config files or source literals, and its
//! absence is fatal before the listener ever binds.

use std::fmt;

use thiserror::Error;

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "AVE_API_KEY";

/// The upstream API credential. Debug output is redacted.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Read the credential from the environment. Empty values count as
    /// absent.
    pub fn from_env() -> Result<Self, CredentialError> {
        match std::env::var(API_KEY_ENV) {
            Ok(value) if !value.trim().is_empty() => Ok(Self(value)),
            _ => Err(CredentialError::Missing),
        }
    }

    /// Build a key from a known value (tests, alternate injection points).
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw key, for placing into the outbound header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("AVE_API_KEY is not set; the gateway cannot authenticate to the upstream API")]
    Missing,
}
