//! Payza IPN server
//!
//! Receives Payza instant payment notifications and serves the return and
//! checkout URL endpoints.

use std::time::Duration;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use payza_ipn::adapters::http::{payza_router, PayzaAppState};
use payza_ipn::adapters::payza::build_verifier;
use payza_ipn::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.server.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let integration = config.payza.integration()?;
    let verifier = build_verifier(&config.payza)?;
    tracing::info!(
        mode = %integration.mode(),
        service_url = integration.service_url(),
        verification = ?config.payza.verification,
        "Payza integration configured"
    );

    let state = PayzaAppState::new(
        config.payza.checkout_endpoints(),
        config.payza.integration_mode.clone(),
        verifier,
    );
    let app = payza_router()
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Payza IPN server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
