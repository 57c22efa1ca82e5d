//! Payment status as reported in `ap_status`.

use serde::Serialize;

/// Raw status literal for a completed one-off payment.
pub const STATUS_SUCCESS: &str = "Success";

/// Raw status literal for a completed subscription instalment.
pub const STATUS_SUBSCRIPTION_PAYMENT_SUCCESS: &str = "Subscription-Payment-Success";

/// Classification of the gateway's status string.
///
/// Always derived from the payload on demand; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "raw", rename_all = "snake_case")]
pub enum PaymentStatus {
    Success,
    SubscriptionPaymentSuccess,
    /// Any other status, kept verbatim. Missing status is `Other("")`.
    Other(String),
}

impl PaymentStatus {
    /// Classify a raw status. Matching is exact: case-sensitive, no trimming.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            STATUS_SUCCESS => PaymentStatus::Success,
            STATUS_SUBSCRIPTION_PAYMENT_SUCCESS => PaymentStatus::SubscriptionPaymentSuccess,
            other => PaymentStatus::Other(other.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PaymentStatus::Success)
    }

    pub fn is_subscription_payment(&self) -> bool {
        matches!(self, PaymentStatus::SubscriptionPaymentSuccess)
    }
}
