//! Payza notification verifier adapters.
//!
//! Implements the `NotificationVerifier` port:
//! - `PostbackVerifier` - re-posts the IPN to the gateway and checks its answer
//! - `SecurityCodeVerifier` - compares the echoed merchant security code
//! - `MockNotificationVerifier` - configurable double for tests
//!
//! # Security
//!
//! - Security codes are held as `secrecy::SecretString` and never logged
//! - Code comparison is constant-time
//! - Every verifier failure is treated as "not authentic" by callers

use std::sync::Arc;

use crate::config::{PayzaConfig, ValidationError, VerificationStrategy};
use crate::ports::NotificationVerifier;

mod mock_notification_verifier;
mod postback_verifier;
mod security_code_verifier;

pub use mock_notification_verifier::MockNotificationVerifier;
pub use postback_verifier::{PostbackConfig, PostbackVerifier, DEFAULT_CONFIRMATION_TOKEN};
pub use security_code_verifier::SecurityCodeVerifier;

/// Build the verifier selected by configuration.
///
/// # Errors
///
/// `ValidationError::MissingRequired` when the security code strategy is
/// selected without a code, or with a blank one.
pub fn build_verifier(
    config: &PayzaConfig,
) -> Result<Arc<dyn NotificationVerifier>, ValidationError> {
    match config.verification {
        VerificationStrategy::Postback => {
            let postback = PostbackConfig::new(config.ipn_verify_url.clone())
                .with_confirmation_token(config.verification_token.clone())
                .with_timeout(config.verify_timeout());
            Ok(Arc::new(PostbackVerifier::new(postback)))
        }
        VerificationStrategy::SecurityCode => {
            let code = config
                .non_blank_security_code()
                .cloned()
                .ok_or(ValidationError::MissingRequired("PAYZA_SECURITY_CODE"))?;
            Ok(Arc::new(SecurityCodeVerifier::new(code)))
        }
    }
}
