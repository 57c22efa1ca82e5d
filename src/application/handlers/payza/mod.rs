//! Payza handlers.
//!
//! ## Commands
//! - Processing inbound instant payment notifications

mod handle_ipn;

pub use handle_ipn::{HandleIpnCommand, HandleIpnHandler, HandleIpnResult, IpnError};
