//! Checkout endpoint resolution.
//!
//! Both URLs are plain configuration values injected at startup. Tests and
//! operators point them elsewhere (a mock gateway, a proxy) by building a
//! different `CheckoutEndpoints`; nothing here is process-global.

use super::errors::ConfigurationError;
use super::mode::IntegrationMode;

/// Default live checkout URL.
pub const DEFAULT_PRODUCTION_URL: &str = "https://secure.payza.com/checkout";

/// Default sandbox checkout URL.
pub const DEFAULT_TEST_URL: &str = "https://sandbox.payza.com/sandbox/checkout";

/// Checkout base URLs, one per integration mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutEndpoints {
    production_url: String,
    test_url: String,
}

impl CheckoutEndpoints {
    pub fn new(production_url: impl Into<String>, test_url: impl Into<String>) -> Self {
        Self {
            production_url: production_url.into(),
            test_url: test_url.into(),
        }
    }

    /// Replace the production checkout URL.
    pub fn with_production_url(mut self, url: impl Into<String>) -> Self {
        self.production_url = url.into();
        self
    }

    /// Replace the sandbox checkout URL.
    pub fn with_test_url(mut self, url: impl Into<String>) -> Self {
        self.test_url = url.into();
        self
    }

    pub fn production_url(&self) -> &str {
        &self.production_url
    }

    pub fn test_url(&self) -> &str {
        &self.test_url
    }

    /// Checkout URL for an already-validated mode.
    pub fn service_url(&self, mode: IntegrationMode) -> &str {
        match mode {
            IntegrationMode::Production => &self.production_url,
            IntegrationMode::Test => &self.test_url,
        }
    }

    /// Checkout URL for a raw mode value taken from host configuration.
    ///
    /// # Errors
    ///
    /// `ConfigurationError::InvalidIntegrationMode` for anything other than
    /// `production` or `test`.
    pub fn resolve_checkout_url(&self, mode: &str) -> Result<&str, ConfigurationError> {
        let mode: IntegrationMode = mode.parse()?;
        Ok(self.service_url(mode))
    }
}

impl Default for CheckoutEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCTION_URL, DEFAULT_TEST_URL)
    }
}
