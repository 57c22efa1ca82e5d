//! Domain layer - Payza gateway types and decoding rules.

pub mod payza;
