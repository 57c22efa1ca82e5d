//! Payza integration configuration

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::payza::{
    CheckoutEndpoints, ConfigurationError, IntegrationMode, PayzaIntegration,
    DEFAULT_PRODUCTION_URL, DEFAULT_TEST_URL,
};

/// Payza configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PayzaConfig {
    /// Integration mode, `production` or `test`
    #[serde(default = "default_integration_mode")]
    pub integration_mode: String,

    /// Live checkout URL
    #[serde(default = "default_production_url")]
    pub production_url: String,

    /// Sandbox checkout URL
    #[serde(default = "default_test_url")]
    pub test_url: String,

    /// How inbound notifications are authenticated
    #[serde(default)]
    pub verification: VerificationStrategy,

    /// Gateway endpoint for IPN postback verification
    #[serde(default = "default_ipn_verify_url")]
    pub ipn_verify_url: String,

    /// Gateway answer that confirms a postback
    #[serde(default = "default_verification_token")]
    pub verification_token: String,

    /// Postback timeout in seconds
    #[serde(default = "default_verify_timeout")]
    pub verify_timeout_secs: u64,

    /// Merchant IPN security code (required for `security_code` verification)
    #[serde(default)]
    pub security_code: Option<SecretString>,
}

/// Notification authentication strategy
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStrategy {
    /// Re-post each IPN to the gateway
    #[default]
    Postback,
    /// Compare the echoed merchant security code
    SecurityCode,
}

impl PayzaConfig {
    /// Configured security code, unless missing or blank
    pub fn non_blank_security_code(&self) -> Option<&SecretString> {
        self.security_code
            .as_ref()
            .filter(|code| !code.expose_secret().trim().is_empty())
    }

    /// Parse the configured integration mode
    pub fn mode(&self) -> Result<IntegrationMode, ConfigurationError> {
        self.integration_mode.parse()
    }

    /// Check if checkout traffic goes to the live gateway
    pub fn is_production(&self) -> bool {
        matches!(self.mode(), Ok(IntegrationMode::Production))
    }

    pub fn checkout_endpoints(&self) -> CheckoutEndpoints {
        CheckoutEndpoints::new(self.production_url.clone(), self.test_url.clone())
    }

    /// Build the integration facade for this deployment
    pub fn integration(&self) -> Result<PayzaIntegration, ConfigurationError> {
        PayzaIntegration::from_mode_str(self.checkout_endpoints(), &self.integration_mode)
    }

    pub fn verify_timeout(&self) -> Duration {
        Duration::from_secs(self.verify_timeout_secs)
    }

    /// Validate Payza configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mode = self.mode()?;

        if !is_http_url(&self.production_url) {
            return Err(ValidationError::InvalidUrl("production_url"));
        }
        if !is_http_url(&self.test_url) {
            return Err(ValidationError::InvalidUrl("test_url"));
        }
        if mode == IntegrationMode::Production && !self.production_url.starts_with("https://") {
            return Err(ValidationError::CheckoutUrlMustBeHttps);
        }

        match self.verification {
            VerificationStrategy::Postback => {
                if !is_http_url(&self.ipn_verify_url) {
                    return Err(ValidationError::InvalidUrl("ipn_verify_url"));
                }
                if self.verify_timeout_secs == 0 || self.verify_timeout_secs > 120 {
                    return Err(ValidationError::InvalidVerifyTimeout);
                }
                if self.verification_token.trim().is_empty() {
                    return Err(ValidationError::MissingRequired("PAYZA_VERIFICATION_TOKEN"));
                }
            }
            VerificationStrategy::SecurityCode => {
                if self.non_blank_security_code().is_none() {
                    return Err(ValidationError::MissingRequired("PAYZA_SECURITY_CODE"));
                }
            }
        }

        Ok(())
    }
}

impl Default for PayzaConfig {
    fn default() -> Self {
        Self {
            integration_mode: default_integration_mode(),
            production_url: default_production_url(),
            test_url: default_test_url(),
            verification: VerificationStrategy::default(),
            ipn_verify_url: default_ipn_verify_url(),
            verification_token: default_verification_token(),
            verify_timeout_secs: default_verify_timeout(),
            security_code: None,
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn default_integration_mode() -> String {
    "production".to_string()
}

fn default_production_url() -> String {
    DEFAULT_PRODUCTION_URL.to_string()
}

fn default_test_url() -> String {
    DEFAULT_TEST_URL.to_string()
}

fn default_ipn_verify_url() -> String {
    "https://secure.payza.com/ipn2.ashx".to_string()
}

fn default_verification_token() -> String {
    crate::adapters::payza::DEFAULT_CONFIRMATION_TOKEN.to_string()
}

fn default_verify_timeout() -> u64 {
    10
}
