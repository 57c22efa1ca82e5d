//! Payza HTTP adapter.
//!
//! Exposes the IPN webhook, the return redirect decoder and the checkout
//! URL resolver over axum.

mod dto;
mod handlers;
mod routes;

pub use dto::{CheckoutUrlResponse, ErrorResponse, ReturnResponse};
pub use handlers::{PayzaApiError, PayzaAppState};
pub use routes::{payza_router, payza_routes, webhook_routes};
