//! Payza integration error types.

use thiserror::Error;

/// Host configuration carries a value this integration cannot act on.
///
/// Fatal to the caller: the resolver never falls back to another URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Integration mode set to an invalid value: {0}")]
    InvalidIntegrationMode(String),
}

/// The raw body could not be read as `application/x-www-form-urlencoded`.
///
/// Individual fields never fail to decode; this only fires when there is no
/// key/value mapping to wrap in the first place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("Payload is not form encoded: {0}")]
    NotFormEncoded(String),
}
