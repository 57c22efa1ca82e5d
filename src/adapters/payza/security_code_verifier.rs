//! Shared security code verification.
//!
//! Payza echoes the merchant's IPN security code in `ap_securitycode`. A
//! notification is genuine when that echo matches the code configured on
//! the merchant profile. No network round-trip.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::payza::{PayzaFields, RawPayload};
use crate::ports::{NotificationVerifier, VerificationError};

/// Verifier comparing the echoed security code with the merchant's.
pub struct SecurityCodeVerifier {
    security_code: SecretString,
}

impl SecurityCodeVerifier {
    pub fn new(security_code: SecretString) -> Self {
        Self { security_code }
    }
}

#[async_trait]
impl NotificationVerifier for SecurityCodeVerifier {
    async fn verify(&self, payload: &RawPayload) -> Result<bool, VerificationError> {
        let matches = payload.security_code_matches(&self.security_code);
        if !matches {
            tracing::debug!(
                present = payload.security_code().is_some(),
                "Payza security code mismatch"
            );
        }
        Ok(matches)
    }
}
