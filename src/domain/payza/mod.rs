//! Payza (AlertPay) integration domain.
//!
//! # Module Structure
//!
//! - `mode` / `endpoints` - Integration mode and checkout URL resolution
//! - `payload` - Raw key/value payload as received
//! - `fields` - Field table and typed accessors shared by both views
//! - `amount` - Lenient decimal parsing for amounts
//! - `status` - Payment status classification
//! - `notification` - Inbound IPN view with acknowledge
//! - `return_params` - Browser return redirect view
//! - `integration` - Facade bundling the above for one deployment

mod amount;
mod endpoints;
mod errors;
mod fields;
mod integration;
mod mode;
mod notification;
mod payload;
mod return_params;
mod status;

pub use amount::parse_lenient_decimal;
pub use endpoints::{CheckoutEndpoints, DEFAULT_PRODUCTION_URL, DEFAULT_TEST_URL};
pub use errors::{ConfigurationError, PayloadError};
pub use fields::{
    PayzaFields, AMOUNT, CURRENCY, CUSTOM_FIELDS, ITEM_CODE, ITEM_NAME, MERCHANT, PURCHASE_TYPE,
    REFERENCE_NUMBER, SECURITY_CODE, SHIPPING_CHARGES, STATUS, TOTAL_AMOUNT,
};
pub use integration::PayzaIntegration;
pub use mode::IntegrationMode;
pub use notification::Notification;
pub use payload::RawPayload;
pub use return_params::Return;
pub use status::{PaymentStatus, STATUS_SUBSCRIPTION_PAYMENT_SUCCESS, STATUS_SUCCESS};
