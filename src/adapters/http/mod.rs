//! HTTP adapters - REST API implementations.

pub mod payza;

// Re-export key types for convenience
pub use payza::payza_router;
pub use payza::PayzaAppState;
