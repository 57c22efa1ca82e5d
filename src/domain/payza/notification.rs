//! Inbound Instant Payment Notification.
//!
//! A `Notification` wraps one IPN delivery and exposes the Payza field table
//! through [`PayzaFields`]. It only structures what arrived; call
//! [`Notification::acknowledge`] before trusting any field.
//!
//! ```ignore
//! let notification = Notification::from_form_body(&body)?;
//! if notification.acknowledge(verifier.as_ref()).await
//!     && notification.is_successful()
//!     && order.total == notification.amount()
//! {
//!     order.mark_paid(notification.reference_number());
//! }
//! ```

use crate::ports::NotificationVerifier;

use super::errors::PayloadError;
use super::fields::PayzaFields;
use super::payload::RawPayload;

/// One IPN delivery, decoded from the POST body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    payload: RawPayload,
}

impl Notification {
    pub fn new(payload: RawPayload) -> Self {
        Self { payload }
    }

    /// Decode a form-encoded IPN body.
    ///
    /// # Errors
    ///
    /// `PayloadError` only when the body is not form-encoded at all. Missing
    /// or malformed fields are never an error.
    pub fn from_form_body(body: &[u8]) -> Result<Self, PayloadError> {
        let payload = RawPayload::from_form_body(body)?;
        tracing::debug!(fields = payload.len(), "Decoded Payza notification");
        Ok(Self::new(payload))
    }

    /// Ask `verifier` whether this notification is genuine.
    ///
    /// Fails closed: a verifier error is logged and reported as `false`.
    pub async fn acknowledge(&self, verifier: &dyn NotificationVerifier) -> bool {
        match verifier.verify(&self.payload).await {
            Ok(true) => true,
            Ok(false) => {
                tracing::warn!(
                    reference_number = self.reference_number().unwrap_or_default(),
                    "Payza notification failed verification"
                );
                false
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    reference_number = self.reference_number().unwrap_or_default(),
                    "Payza notification could not be verified"
                );
                false
            }
        }
    }

    pub fn into_payload(self) -> RawPayload {
        self.payload
    }
}

impl PayzaFields for Notification {
    fn payload(&self) -> &RawPayload {
        &self.payload
    }
}

impl From<RawPayload> for Notification {
    fn from(payload: RawPayload) -> Self {
        Self::new(payload)
    }
}
