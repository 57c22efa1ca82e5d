//! Property tests for notification decoding.
//!
//! Uses proptest to check that decoding is total and that field access does
//! not depend on how the gateway orders its keys.

use proptest::prelude::*;

use payza_ipn::domain::payza::{
    parse_lenient_decimal, Notification, PayzaFields, RawPayload, Return, CUSTOM_FIELDS,
};

// ============================================================================
// STRATEGIES
// ============================================================================

const KEYS: &[&str] = &[
    "ap_purchasetype",
    "ap_securitycode",
    "ap_itemname",
    "ap_shippingcharges",
    "ap_amount",
    "ap_totalamount",
    "ap_currency",
    "ap_status",
    "ap_referencenumber",
    "ap_merchant",
    "ap_itemcode",
    "apc_1",
    "apc_2",
    "apc_3",
    "apc_4",
    "apc_5",
    "apc_6",
];

/// A subset of the known keys with arbitrary printable values.
fn arb_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::sample::subsequence(KEYS.to_vec(), 0..=KEYS.len()).prop_flat_map(|keys| {
        let n = keys.len();
        proptest::collection::vec("[ -~]{0,12}", n).prop_map(move |values| {
            keys.iter()
                .map(|k| k.to_string())
                .zip(values)
                .collect::<Vec<_>>()
        })
    })
}

fn encode(pairs: &[(String, String)]) -> String {
    serde_urlencoded::to_string(pairs).unwrap()
}

fn snapshot(n: &impl PayzaFields) -> (Vec<Option<String>>, Vec<u64>, bool, bool) {
    let strings = [
        n.purchase_type(),
        n.security_code(),
        n.item_name(),
        n.currency(),
        n.status(),
        n.reference_number(),
        n.merchant(),
        n.item_code(),
    ]
    .into_iter()
    .chain(n.custom())
    .map(|v| v.map(str::to_string))
    .collect();
    let numbers = vec![
        n.shipping().to_bits(),
        n.amount().to_bits(),
        n.total_amount().to_bits(),
    ];
    (strings, numbers, n.is_successful(), n.is_subscription_payment())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // ========================================================================
    // Decoding
    // ========================================================================

    #[test]
    fn prop_any_utf8_body_decodes(body in "\\PC{0,64}") {
        let notification = Notification::from_form_body(body.as_bytes());
        prop_assert!(notification.is_ok());
        let notification = notification.unwrap();
        prop_assert_eq!(notification.custom().len(), CUSTOM_FIELDS.len());
        prop_assert!(!notification.amount().is_nan());
    }

    #[test]
    fn prop_key_order_is_irrelevant(
        (pairs, shuffled) in arb_pairs().prop_flat_map(|pairs| {
            let shuffled = Just(pairs.clone()).prop_shuffle();
            (Just(pairs), shuffled)
        })
    ) {
        let a = Notification::from_form_body(encode(&pairs).as_bytes()).unwrap();
        let b = Notification::from_form_body(encode(&shuffled).as_bytes()).unwrap();
        prop_assert_eq!(snapshot(&a), snapshot(&b));
    }

    #[test]
    fn prop_notification_and_return_agree(pairs in arb_pairs()) {
        let encoded = encode(&pairs);
        let notification = Notification::from_form_body(encoded.as_bytes()).unwrap();
        let params = Return::from_query_string(&encoded).unwrap();
        prop_assert_eq!(snapshot(&notification), snapshot(&params));
    }

    #[test]
    fn prop_values_survive_encoding(pairs in arb_pairs()) {
        let payload = RawPayload::from_form_body(encode(&pairs).as_bytes()).unwrap();
        for (key, value) in &pairs {
            prop_assert_eq!(payload.get(key), Some(value.as_str()));
        }
    }

    // ========================================================================
    // Lenient decimals
    // ========================================================================

    #[test]
    fn prop_plain_decimals_parse_exactly(x in -1.0e9f64..1.0e9) {
        let text = x.to_string();
        prop_assert_eq!(parse_lenient_decimal(&text), x);
    }

    #[test]
    fn prop_trailing_garbage_is_ignored(
        x in 0.0f64..1.0e6,
        suffix in "[a-df-zA-DF-Z ,;]{1,6}",
    ) {
        let text = format!("{}{}", x, suffix);
        prop_assert_eq!(parse_lenient_decimal(&text), x);
    }

    #[test]
    fn prop_text_without_digits_is_zero(text in "[a-zA-Z ,;]{0,12}") {
        prop_assert_eq!(parse_lenient_decimal(&text), 0.0);
    }
}
