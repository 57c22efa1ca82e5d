//! Browser return redirect after checkout.
//!
//! Carries the same field table as an IPN, on the query string. Browser
//! redirects are never re-verified against the gateway, so this view has no
//! acknowledge step: treat it as a display hint, not as payment proof.

use super::errors::PayloadError;
use super::fields::PayzaFields;
use super::payload::RawPayload;

/// Query-string parameters of a return redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Return {
    payload: RawPayload,
}

impl Return {
    pub fn new(payload: RawPayload) -> Self {
        Self { payload }
    }

    /// Parse the redirect's query string. A leading `?` is accepted.
    pub fn from_query_string(query: &str) -> Result<Self, PayloadError> {
        RawPayload::from_query_string(query).map(Self::new)
    }
}

impl PayzaFields for Return {
    fn payload(&self) -> &RawPayload {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_fields_from_query_string() {
        let ret = Return::from_query_string(
            "?ap_status=Success&ap_amount=12.5abc&ap_currency=CAD&apc_4=promo",
        )
        .unwrap();

        assert!(ret.is_successful());
        assert_eq!(ret.amount(), 12.5);
        assert_eq!(ret.currency(), Some("CAD"));
        assert_eq!(ret.custom(), [None, None, None, Some("promo"), None, None]);
    }

    #[test]
    fn empty_query_yields_defaults() {
        let ret = Return::from_query_string("").unwrap();
        assert_eq!(ret.amount(), 0.0);
        assert_eq!(ret.status(), None);
        assert_eq!(ret.custom(), [None; 6]);
    }
}
