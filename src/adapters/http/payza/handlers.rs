//! HTTP handlers for Payza endpoints.
//!
//! These handlers connect Axum routes to the IPN command handler and the
//! synchronous decoders.

use std::sync::Arc;

use axum::extract::{Json, RawQuery, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::payza::{HandleIpnCommand, HandleIpnHandler, IpnError};
use crate::domain::payza::{CheckoutEndpoints, ConfigurationError, PayloadError, Return};
use crate::ports::NotificationVerifier;

use super::dto::{CheckoutUrlResponse, ErrorResponse, ReturnResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state.
///
/// Endpoints and mode are read-only after startup.
#[derive(Clone)]
pub struct PayzaAppState {
    pub endpoints: CheckoutEndpoints,
    pub integration_mode: String,
    pub verifier: Arc<dyn NotificationVerifier>,
}

impl PayzaAppState {
    pub fn new(
        endpoints: CheckoutEndpoints,
        integration_mode: impl Into<String>,
        verifier: Arc<dyn NotificationVerifier>,
    ) -> Self {
        Self {
            endpoints,
            integration_mode: integration_mode.into(),
            verifier,
        }
    }

    pub fn ipn_handler(&self) -> HandleIpnHandler {
        HandleIpnHandler::new(self.verifier.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/webhooks/payza - Handle an instant payment notification
pub async fn handle_payza_ipn(
    State(state): State<PayzaAppState>,
    body: axum::body::Bytes,
) -> Result<impl IntoResponse, PayzaApiError> {
    let handler = state.ipn_handler();
    let cmd = HandleIpnCommand {
        payload: body.to_vec(),
    };

    let result = handler.handle(cmd).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// GET /api/payza/return - Decode the browser return redirect
pub async fn handle_payza_return(
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, PayzaApiError> {
    let params = Return::from_query_string(query.as_deref().unwrap_or_default())?;
    Ok(Json(ReturnResponse::from(&params)))
}

/// GET /api/payza/checkout-url - Resolve the checkout URL for the configured mode
pub async fn get_checkout_url(
    State(state): State<PayzaAppState>,
) -> Result<impl IntoResponse, PayzaApiError> {
    let service_url = state
        .endpoints
        .resolve_checkout_url(&state.integration_mode)?;
    let response = CheckoutUrlResponse {
        service_url: service_url.to_string(),
        integration_mode: state.integration_mode.clone(),
    };
    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum PayzaApiError {
    Ipn(IpnError),
    Payload(PayloadError),
    Configuration(ConfigurationError),
}

impl From<IpnError> for PayzaApiError {
    fn from(err: IpnError) -> Self {
        Self::Ipn(err)
    }
}

impl From<PayloadError> for PayzaApiError {
    fn from(err: PayloadError) -> Self {
        Self::Payload(err)
    }
}

impl From<ConfigurationError> for PayzaApiError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

impl IntoResponse for PayzaApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            PayzaApiError::Ipn(IpnError::NotAuthentic) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(
                    "NOTIFICATION_NOT_AUTHENTIC",
                    IpnError::NotAuthentic.to_string(),
                ),
            ),
            PayzaApiError::Ipn(IpnError::MalformedPayload(e)) | PayzaApiError::Payload(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("MALFORMED_PAYLOAD", e.to_string()),
            ),
            PayzaApiError::Configuration(e) => {
                tracing::error!(error = %e, "Payza integration misconfigured");
                let ConfigurationError::InvalidIntegrationMode(mode) = e;
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details(
                        "CONFIGURATION_ERROR",
                        e.to_string(),
                        serde_json::json!({ "integration_mode": mode }),
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
