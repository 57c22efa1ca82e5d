//! Data Transfer Objects for Payza HTTP endpoints.

use serde::Serialize;

use crate::domain::payza::{PaymentStatus, PayzaFields, Return};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Checkout URL for the configured integration mode.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutUrlResponse {
    pub service_url: String,
    pub integration_mode: String,
}

/// Field summary of a return redirect.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnResponse {
    pub purchase_type: Option<String>,
    pub item_name: Option<String>,
    pub item_code: Option<String>,
    pub reference_number: Option<String>,
    pub merchant: Option<String>,
    pub status: PaymentStatus,
    pub successful: bool,
    pub amount: f64,
    pub total_amount: f64,
    pub shipping: f64,
    pub currency: Option<String>,
    pub custom: [Option<String>; 6],
}

impl From<&Return> for ReturnResponse {
    fn from(params: &Return) -> Self {
        Self {
            purchase_type: params.purchase_type().map(str::to_string),
            item_name: params.item_name().map(str::to_string),
            item_code: params.item_code().map(str::to_string),
            reference_number: params.reference_number().map(str::to_string),
            merchant: params.merchant().map(str::to_string),
            status: params.payment_status(),
            successful: params.is_successful(),
            amount: params.amount(),
            total_amount: params.total_amount(),
            shipping: params.shipping(),
            currency: params.currency().map(str::to_string),
            custom: params.custom().map(|slot| slot.map(str::to_string)),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_response_keeps_custom_slot_positions() {
        let params = Return::from_query_string("apc_2=b&apc_5=e&ap_amount=3.5").unwrap();
        let response = ReturnResponse::from(&params);

        assert_eq!(
            response.custom,
            [None, Some("b".to_string()), None, None, Some("e".to_string()), None]
        );
        assert_eq!(response.amount, 3.5);
        assert_eq!(response.total_amount, 0.0);
    }

    #[test]
    fn return_response_serializes_status_kind() {
        let params = Return::from_query_string("ap_status=Success").unwrap();
        let json = serde_json::to_value(ReturnResponse::from(&params)).unwrap();

        assert_eq!(json["status"]["kind"], "success");
        assert_eq!(json["successful"], true);
        assert!(json["reference_number"].is_null());
    }

    #[test]
    fn error_response_serializes_without_details_when_none() {
        let response = ErrorResponse::new("MALFORMED_PAYLOAD", "bad body");
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
    }
}
