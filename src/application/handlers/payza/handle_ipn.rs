//! HandleIpnHandler - Command handler for inbound Payza instant payment notifications.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::domain::payza::{Notification, PayloadError, PaymentStatus, PayzaFields};
use crate::ports::NotificationVerifier;

/// Command to handle an IPN.
#[derive(Debug, Clone)]
pub struct HandleIpnCommand {
    /// Raw form-encoded POST body.
    pub payload: Vec<u8>,
}

/// Result of IPN processing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum HandleIpnResult {
    /// One-off payment succeeded.
    PaymentCompleted {
        reference_number: Option<String>,
        item_code: Option<String>,
        amount: f64,
        total_amount: f64,
        currency: Option<String>,
    },
    /// Recurring subscription charge succeeded.
    SubscriptionPaymentCompleted {
        reference_number: Option<String>,
        item_code: Option<String>,
        amount: f64,
        total_amount: f64,
        currency: Option<String>,
    },
    /// Authentic notification with any other status; no action taken.
    Acknowledged { status: String },
}

/// Errors from IPN processing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IpnError {
    #[error("Notification could not be verified with Payza")]
    NotAuthentic,

    #[error("Malformed notification: {0}")]
    MalformedPayload(#[from] PayloadError),
}

/// Handler for processing Payza IPNs.
///
/// Decodes the body, acknowledges it through the configured verifier, then
/// classifies the payment status. Unverified notifications never reach
/// classification.
pub struct HandleIpnHandler {
    verifier: Arc<dyn NotificationVerifier>,
}

impl HandleIpnHandler {
    pub fn new(verifier: Arc<dyn NotificationVerifier>) -> Self {
        Self { verifier }
    }

    pub async fn handle(&self, cmd: HandleIpnCommand) -> Result<HandleIpnResult, IpnError> {
        // 1. Decode the form body
        let notification = Notification::from_form_body(&cmd.payload)?;

        // 2. Confirm authenticity
        if !notification.acknowledge(self.verifier.as_ref()).await {
            return Err(IpnError::NotAuthentic);
        }

        // 3. Classify
        let result = match notification.payment_status() {
            PaymentStatus::Success => HandleIpnResult::PaymentCompleted {
                reference_number: owned(notification.reference_number()),
                item_code: owned(notification.item_code()),
                amount: notification.amount(),
                total_amount: notification.total_amount(),
                currency: owned(notification.currency()),
            },
            PaymentStatus::SubscriptionPaymentSuccess => {
                HandleIpnResult::SubscriptionPaymentCompleted {
                    reference_number: owned(notification.reference_number()),
                    item_code: owned(notification.item_code()),
                    amount: notification.amount(),
                    total_amount: notification.total_amount(),
                    currency: owned(notification.currency()),
                }
            }
            PaymentStatus::Other(status) => HandleIpnResult::Acknowledged { status },
        };

        tracing::info!(
            reference_number = notification.reference_number().unwrap_or_default(),
            status = notification.status().unwrap_or_default(),
            "Payza IPN processed"
        );

        Ok(result)
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}
