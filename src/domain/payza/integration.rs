//! Entry point bundling the resolver and both decoders.

use super::endpoints::CheckoutEndpoints;
use super::errors::{ConfigurationError, PayloadError};
use super::mode::IntegrationMode;
use super::notification::Notification;
use super::return_params::Return;

/// Payza integration for one deployment.
///
/// Built once at startup from configuration and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayzaIntegration {
    endpoints: CheckoutEndpoints,
    mode: IntegrationMode,
}

impl PayzaIntegration {
    pub fn new(endpoints: CheckoutEndpoints, mode: IntegrationMode) -> Self {
        Self { endpoints, mode }
    }

    /// Build from the raw mode string of host configuration.
    ///
    /// # Errors
    ///
    /// `ConfigurationError` when `mode` is neither `production` nor `test`.
    pub fn from_mode_str(
        endpoints: CheckoutEndpoints,
        mode: &str,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(endpoints, mode.parse()?))
    }

    pub fn mode(&self) -> IntegrationMode {
        self.mode
    }

    pub fn endpoints(&self) -> &CheckoutEndpoints {
        &self.endpoints
    }

    /// Checkout URL for the configured mode.
    pub fn service_url(&self) -> &str {
        self.endpoints.service_url(self.mode)
    }

    pub fn notification(&self, body: &[u8]) -> Result<Notification, PayloadError> {
        Notification::from_form_body(body)
    }

    pub fn return_params(&self, query: &str) -> Result<Return, PayloadError> {
        Return::from_query_string(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payza::{PayzaFields, DEFAULT_PRODUCTION_URL, DEFAULT_TEST_URL};

    #[test]
    fn service_url_follows_mode() {
        let live = PayzaIntegration::new(CheckoutEndpoints::default(), IntegrationMode::Production);
        assert_eq!(live.service_url(), DEFAULT_PRODUCTION_URL);

        let sandbox = PayzaIntegration::new(CheckoutEndpoints::default(), IntegrationMode::Test);
        assert_eq!(sandbox.service_url(), DEFAULT_TEST_URL);
    }

    #[test]
    fn invalid_mode_string_is_rejected() {
        let result = PayzaIntegration::from_mode_str(CheckoutEndpoints::default(), "live");
        assert_eq!(
            result,
            Err(ConfigurationError::InvalidIntegrationMode("live".to_string()))
        );
    }

    #[test]
    fn builds_both_views() {
        let integration =
            PayzaIntegration::from_mode_str(CheckoutEndpoints::default(), "test").unwrap();

        let notification = integration.notification(b"ap_amount=5").unwrap();
        assert_eq!(notification.amount(), 5.0);

        let ret = integration.return_params("ap_amount=6").unwrap();
        assert_eq!(ret.amount(), 6.0);
    }
}
