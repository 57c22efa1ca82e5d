//! Axum router configuration for Payza endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_checkout_url, handle_payza_ipn, handle_payza_return, PayzaAppState};

/// Create the Payza API router.
///
/// # Routes
/// - `GET /return` - Decode the browser return redirect
/// - `GET /checkout-url` - Checkout URL for the configured mode
pub fn payza_routes() -> Router<PayzaAppState> {
    Router::new()
        .route("/return", get(handle_payza_return))
        .route("/checkout-url", get(get_checkout_url))
}

/// Create the Payza webhook router.
///
/// Kept apart from the API routes because notifications are authenticated
/// by the verifier, not by the caller.
///
/// # Routes
/// - `POST /payza` - Handle Payza IPNs
pub fn webhook_routes() -> Router<PayzaAppState> {
    Router::new().route("/payza", post(handle_payza_ipn))
}

/// Create the complete Payza router, mounted under `/api`.
///
/// # Example
///
/// ```ignore
/// let app = payza_router().with_state(PayzaAppState::new(endpoints, "test", verifier));
/// ```
pub fn payza_router() -> Router<PayzaAppState> {
    Router::new()
        .nest("/api/payza", payza_routes())
        .nest("/api/webhooks", webhook_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::payza::MockNotificationVerifier;
    use crate::domain::payza::{CheckoutEndpoints, DEFAULT_PRODUCTION_URL};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(mode: &str, verifier: MockNotificationVerifier) -> Router {
        payza_router().with_state(PayzaAppState::new(
            CheckoutEndpoints::default(),
            mode,
            Arc::new(verifier),
        ))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn ipn_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/webhooks/payza")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Webhook
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn webhook_completes_successful_payment() {
        let verifier = MockNotificationVerifier::new();
        let response = app("production", verifier.clone())
            .oneshot(ipn_request(
                "ap_status=Success&ap_referencenumber=ABC&ap_amount=42.10&ap_currency=EUR",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["outcome"], "payment_completed");
        assert_eq!(json["reference_number"], "ABC");
        assert_eq!(json["amount"], 42.1);
        assert_eq!(json["total_amount"], 0.0);
        assert_eq!(json["currency"], "EUR");
        assert_eq!(verifier.call_count(), 1);
    }

    #[tokio::test]
    async fn webhook_rejects_unverified_notification() {
        let response = app("production", MockNotificationVerifier::rejecting())
            .oneshot(ipn_request("ap_status=Success"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = json_body(response).await;
        assert_eq!(json["error_code"], "NOTIFICATION_NOT_AUTHENTIC");
    }

    #[tokio::test]
    async fn webhook_accepts_non_utf8_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/webhooks/payza")
            .body(Body::from(b"ap_status=Refunded&ap_itemname=Caf\xe9".to_vec()))
            .unwrap();

        let response = app("production", MockNotificationVerifier::new())
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["outcome"], "acknowledged");
        assert_eq!(json["status"], "Refunded");
    }

    #[tokio::test]
    async fn webhook_only_accepts_post() {
        let response = app("production", MockNotificationVerifier::new())
            .oneshot(
                Request::builder()
                    .uri("/api/webhooks/payza")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    // ───────────────────────────────────────────────────────────────
    // Return and checkout URL
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn return_decodes_query_string() {
        let response = app("test", MockNotificationVerifier::new())
            .oneshot(
                Request::builder()
                    .uri("/api/payza/return?ap_status=Success&ap_itemname=Blue+Widget&apc_3=x&ap_amount=12.5abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["item_name"], "Blue Widget");
        assert_eq!(json["successful"], true);
        assert_eq!(json["amount"], 12.5);
        assert_eq!(json["custom"][2], "x");
        assert!(json["custom"][0].is_null());
    }

    #[tokio::test]
    async fn return_without_query_yields_defaults() {
        let response = app("test", MockNotificationVerifier::new())
            .oneshot(
                Request::builder()
                    .uri("/api/payza/return")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["successful"], false);
        assert_eq!(json["amount"], 0.0);
    }

    #[tokio::test]
    async fn checkout_url_resolves_production() {
        let response = app("production", MockNotificationVerifier::new())
            .oneshot(
                Request::builder()
                    .uri("/api/payza/checkout-url")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["service_url"], DEFAULT_PRODUCTION_URL);
        assert_eq!(json["integration_mode"], "production");
    }

    #[tokio::test]
    async fn checkout_url_with_invalid_mode_is_server_error() {
        let response = app("live", MockNotificationVerifier::new())
            .oneshot(
                Request::builder()
                    .uri("/api/payza/checkout-url")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["error_code"], "CONFIGURATION_ERROR");
        assert_eq!(
            json["message"],
            "Integration mode set to an invalid value: live"
        );
        assert_eq!(json["details"]["integration_mode"], "live");
    }
}
