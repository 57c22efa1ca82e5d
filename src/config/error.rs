//! Configuration error types

use thiserror::Error;

use crate::domain::payza::ConfigurationError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("{0}")]
    InvalidIntegrationMode(#[from] ConfigurationError),

    #[error("Invalid URL for {0}: must be http or https")]
    InvalidUrl(&'static str),

    #[error("Production checkout URL must use HTTPS")]
    CheckoutUrlMustBeHttps,

    #[error("Invalid IPN verification timeout")]
    InvalidVerifyTimeout,
}
