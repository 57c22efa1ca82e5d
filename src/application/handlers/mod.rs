//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod payza;

pub use payza::{HandleIpnCommand, HandleIpnHandler, HandleIpnResult, IpnError};
