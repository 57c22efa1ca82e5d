//! IPN postback verification.
//!
//! Re-posts the notification body to the gateway's verification endpoint and
//! trusts the payload only when the gateway answers with the confirmation
//! token.
//!
//! # Configuration
//!
//! ```ignore
//! let config = PostbackConfig::new("https://secure.payza.com/ipn2.ashx")
//!     .with_timeout(Duration::from_secs(10));
//! let verifier = PostbackVerifier::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::payza::RawPayload;
use crate::ports::{NotificationVerifier, VerificationError};

/// Default gateway answer that confirms a notification.
pub const DEFAULT_CONFIRMATION_TOKEN: &str = "VERIFIED";

/// Default verification timeout (10 seconds).
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Postback verification settings.
#[derive(Debug, Clone)]
pub struct PostbackConfig {
    /// Gateway endpoint the payload is re-posted to.
    verify_url: String,

    /// Response body that marks the payload as genuine.
    confirmation_token: String,

    /// Upper bound for the whole round-trip.
    timeout: Duration,
}

impl PostbackConfig {
    pub fn new(verify_url: impl Into<String>) -> Self {
        Self {
            verify_url: verify_url.into(),
            confirmation_token: DEFAULT_CONFIRMATION_TOKEN.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_confirmation_token(mut self, token: impl Into<String>) -> Self {
        self.confirmation_token = token.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn verify_url(&self) -> &str {
        &self.verify_url
    }
}

/// Verifier that asks the gateway to confirm each notification.
pub struct PostbackVerifier {
    config: PostbackConfig,
    http_client: reqwest::Client,
}

impl PostbackVerifier {
    pub fn new(config: PostbackConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Body to re-post: the received bytes when we have them.
    fn postback_body(payload: &RawPayload) -> Vec<u8> {
        if payload.raw().is_empty() {
            payload.to_form_string().into_bytes()
        } else {
            payload.raw().to_vec()
        }
    }
}

#[async_trait]
impl NotificationVerifier for PostbackVerifier {
    async fn verify(&self, payload: &RawPayload) -> Result<bool, VerificationError> {
        let response = self
            .http_client
            .post(&self.config.verify_url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .timeout(self.config.timeout)
            .body(Self::postback_body(payload))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    VerificationError::Timeout
                } else {
                    VerificationError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Payza postback rejected");
            return Err(VerificationError::UnexpectedStatus(status.as_u16()));
        }

        let answer = response.text().await.map_err(|e| {
            if e.is_timeout() {
                VerificationError::Timeout
            } else {
                VerificationError::Network(e.to_string())
            }
        })?;

        let verified = answer.trim() == self.config.confirmation_token;
        tracing::debug!(verified, "Payza postback answered");
        Ok(verified)
    }
}
