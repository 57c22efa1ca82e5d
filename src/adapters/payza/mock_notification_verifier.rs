//! Mock notification verifier for testing.
//!
//! Provides a configurable `NotificationVerifier` for unit and integration
//! tests. Supports:
//! - Accepting or rejecting every payload
//! - Error injection
//! - Call tracking

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::payza::RawPayload;
use crate::ports::{NotificationVerifier, VerificationError};

/// Mock verifier for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockNotificationVerifier::rejecting();
/// let handler = HandleIpnHandler::new(Arc::new(mock.clone()));
/// // ...
/// assert_eq!(mock.call_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockNotificationVerifier {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    mode: VerifyMode,

    /// Payloads seen, in call order.
    calls: Vec<RawPayload>,
}

/// How to answer verification requests.
#[derive(Default, Clone)]
enum VerifyMode {
    #[default]
    AcceptAll,
    RejectAll,
    Fail(VerificationError),
}

impl MockNotificationVerifier {
    /// Create a mock that accepts every payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that rejects every payload.
    pub fn rejecting() -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().mode = VerifyMode::RejectAll;
        mock
    }

    /// Create a mock whose verification round-trip always errors.
    pub fn failing(error: VerificationError) -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().mode = VerifyMode::Fail(error);
        mock
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().calls.len()
    }

    pub fn last_payload(&self) -> Option<RawPayload> {
        self.inner.lock().unwrap().calls.last().cloned()
    }
}

#[async_trait]
impl NotificationVerifier for MockNotificationVerifier {
    async fn verify(&self, payload: &RawPayload) -> Result<bool, VerificationError> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(payload.clone());

        match &state.mode {
            VerifyMode::AcceptAll => Ok(true),
            VerifyMode::RejectAll => Ok(false),
            VerifyMode::Fail(error) => Err(error.clone()),
        }
    }
}
