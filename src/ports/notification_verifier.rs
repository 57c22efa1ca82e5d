//! Notification verifier port.
//!
//! Decoding an IPN says nothing about who sent it. Authenticity comes from a
//! separate check against the gateway (re-posting the payload) or against
//! the merchant's shared security code. Implementations live in
//! `adapters::payza`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::payza::RawPayload;

/// Port for confirming that an IPN payload really came from Payza.
#[async_trait]
pub trait NotificationVerifier: Send + Sync {
    /// Check the payload's authenticity.
    ///
    /// `Ok(false)` means the check ran and the payload is not genuine.
    /// `Err` means the check itself could not complete; callers treat it
    /// the same as `Ok(false)`.
    async fn verify(&self, payload: &RawPayload) -> Result<bool, VerificationError>;
}

/// Failures of the verification round-trip itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("Verification request failed: {0}")]
    Network(String),

    #[error("Verification request timed out")]
    Timeout,

    #[error("Gateway answered verification with HTTP {0}")]
    UnexpectedStatus(u16),
}
