//! Ports - Interfaces between the domain and the outside world.
//!
//! Adapters in `crate::adapters` provide the implementations.

mod notification_verifier;

pub use notification_verifier::{NotificationVerifier, VerificationError};
