//! Payza IPN field table and the accessors shared by every payload source.
//!
//! The same keys arrive in the IPN POST body and on the return redirect's
//! query string, so both views implement [`PayzaFields`] over a
//! [`RawPayload`] and inherit every accessor. Nothing is cached: each call
//! re-reads the payload.

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use super::amount::parse_lenient_decimal;
use super::payload::RawPayload;
use super::status::{PaymentStatus, STATUS_SUBSCRIPTION_PAYMENT_SUCCESS, STATUS_SUCCESS};

pub const PURCHASE_TYPE: &str = "ap_purchasetype";
pub const SECURITY_CODE: &str = "ap_securitycode";
pub const ITEM_NAME: &str = "ap_itemname";
pub const SHIPPING_CHARGES: &str = "ap_shippingcharges";
pub const AMOUNT: &str = "ap_amount";
pub const TOTAL_AMOUNT: &str = "ap_totalamount";
pub const CURRENCY: &str = "ap_currency";
pub const STATUS: &str = "ap_status";
pub const REFERENCE_NUMBER: &str = "ap_referencenumber";
pub const MERCHANT: &str = "ap_merchant";
pub const ITEM_CODE: &str = "ap_itemcode";

/// Keys of the six merchant-defined pass-through fields, in order.
pub const CUSTOM_FIELDS: [&str; 6] = ["apc_1", "apc_2", "apc_3", "apc_4", "apc_5", "apc_6"];

/// Typed, read-only projection of a Payza payload.
pub trait PayzaFields {
    /// The payload every accessor reads from.
    fn payload(&self) -> &RawPayload;

    /// Purchase type, e.g. `item` or `subscription`.
    fn purchase_type(&self) -> Option<&str> {
        self.payload().get(PURCHASE_TYPE)
    }

    /// Security code echoed by the gateway.
    ///
    /// Compare it with the merchant's own code via
    /// [`PayzaFields::security_code_matches`] rather than by hand.
    fn security_code(&self) -> Option<&str> {
        self.payload().get(SECURITY_CODE)
    }

    fn item_name(&self) -> Option<&str> {
        self.payload().get(ITEM_NAME)
    }

    fn shipping(&self) -> f64 {
        decimal_field(self.payload(), SHIPPING_CHARGES)
    }

    fn amount(&self) -> f64 {
        decimal_field(self.payload(), AMOUNT)
    }

    /// Total amount received.
    fn total_amount(&self) -> f64 {
        decimal_field(self.payload(), TOTAL_AMOUNT)
    }

    /// Currency code as sent; not checked against any currency list.
    fn currency(&self) -> Option<&str> {
        self.payload().get(CURRENCY)
    }

    /// Raw status string, e.g. `Success`.
    fn status(&self) -> Option<&str> {
        self.payload().get(STATUS)
    }

    /// Gateway transaction id.
    fn reference_number(&self) -> Option<&str> {
        self.payload().get(REFERENCE_NUMBER)
    }

    /// Email of the merchant account that received the funds.
    fn merchant(&self) -> Option<&str> {
        self.payload().get(MERCHANT)
    }

    fn item_code(&self) -> Option<&str> {
        self.payload().get(ITEM_CODE)
    }

    /// `apc_1` through `apc_6`; absent keys stay `None` in their slot.
    fn custom(&self) -> [Option<&str>; 6] {
        let payload = self.payload();
        CUSTOM_FIELDS.map(|key| payload.get(key))
    }

    fn is_successful(&self) -> bool {
        self.status() == Some(STATUS_SUCCESS)
    }

    fn is_subscription_payment(&self) -> bool {
        self.status() == Some(STATUS_SUBSCRIPTION_PAYMENT_SUCCESS)
    }

    fn payment_status(&self) -> PaymentStatus {
        PaymentStatus::from_raw(self.status().unwrap_or_default())
    }

    /// Constant-time comparison of the echoed security code with the
    /// merchant's. A missing code never matches, and neither does anything
    /// when the merchant's code is empty.
    fn security_code_matches(&self, expected: &SecretString) -> bool {
        if expected.expose_secret().is_empty() {
            return false;
        }
        match self.security_code() {
            Some(received) => received
                .as_bytes()
                .ct_eq(expected.expose_secret().as_bytes())
                .into(),
            None => false,
        }
    }
}

fn decimal_field(payload: &RawPayload, key: &str) -> f64 {
    payload.get(key).map(parse_lenient_decimal).unwrap_or(0.0)
}

impl PayzaFields for RawPayload {
    fn payload(&self) -> &RawPayload {
        self
    }
}
