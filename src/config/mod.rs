//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PAYZA_IPN_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use payza_ipn::config::AppConfig;
//!
//! let config = AppConfig::load_validated().expect("Invalid configuration");
//!
//! println!("Checkout URL: {:?}", config.payza.integration().map(|i| i.service_url().to_string()));
//! ```

mod error;
mod payza;
mod server;

pub use error::{ConfigError, ValidationError};
pub use payza::{PayzaConfig, VerificationStrategy};
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every field has a default, so an empty environment loads a working
/// production configuration that verifies notifications by postback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payza gateway configuration (mode, checkout URLs, verification)
    #[serde(default)]
    pub payza: PayzaConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAYZA_IPN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PAYZA_IPN__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PAYZA_IPN__PAYZA__INTEGRATION_MODE=test` -> `payza.integration_mode = "test"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAYZA_IPN")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration and reject it unless it validates
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when values cannot be parsed,
    /// `ConfigError::ValidationFailed` when they parse but are invalid.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.payza.validate()?;
        Ok(())
    }

    /// Check if checkout traffic goes to the live gateway
    pub fn is_production(&self) -> bool {
        self.payza.is_production()
    }
}
