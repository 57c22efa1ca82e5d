//! Payza IPN - Payza (AlertPay) payment gateway integration
//!
//! Resolves the checkout URL for the configured integration mode, decodes
//! instant payment notifications and browser return redirects, and verifies
//! that notifications really come from the gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
