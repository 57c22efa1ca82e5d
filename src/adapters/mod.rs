//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum routes for the webhook, return and checkout endpoints
//! - `payza` - notification verifiers

pub mod http;
pub mod payza;
