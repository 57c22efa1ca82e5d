//! Raw key/value payload as delivered by the gateway.

use std::collections::HashMap;

use super::errors::PayloadError;

/// Immutable field-name to value mapping received from Payza.
///
/// Built once per delivery and never mutated. When a key repeats in the
/// encoded source the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPayload {
    params: HashMap<String, String>,
    raw: Vec<u8>,
}

impl RawPayload {
    /// Decode an `application/x-www-form-urlencoded` POST body.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD in the decoded values; the
    /// received bytes are kept untouched for postback.
    ///
    /// # Errors
    ///
    /// `PayloadError::NotFormEncoded` when the body cannot be split into
    /// key/value pairs.
    pub fn from_form_body(body: &[u8]) -> Result<Self, PayloadError> {
        let text = String::from_utf8_lossy(body);
        Ok(Self {
            params: Self::decode(&text)?,
            raw: body.to_vec(),
        })
    }

    /// Decode a URL query string. A leading `?` is ignored.
    pub fn from_query_string(query: &str) -> Result<Self, PayloadError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        Ok(Self {
            params: Self::decode(query)?,
            raw: query.as_bytes().to_vec(),
        })
    }

    fn decode(encoded: &str) -> Result<HashMap<String, String>, PayloadError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(encoded)
            .map_err(|e| PayloadError::NotFormEncoded(e.to_string()))?;
        Ok(pairs.into_iter().collect())
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The encoded source this payload was decoded from.
    ///
    /// Empty when the payload was built from pairs. Postback verification
    /// re-posts exactly these bytes.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Encode the mapping back to form syntax, in sorted key order.
    pub fn to_form_string(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.sort_unstable();
        // Serializing a slice of string pairs cannot fail.
        serde_urlencoded::to_string(pairs).unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for RawPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            raw: Vec::new(),
        }
    }
}

impl From<HashMap<String, String>> for RawPayload {
    fn from(params: HashMap<String, String>) -> Self {
        Self {
            params,
            raw: Vec::new(),
        }
    }
}
