//! # Response Envelope
//!
//! The backend wraps most successful payloads as `{ "data": ... }` and most
//! failures as `{ "error": "..." }` or `{ "message": "..." }`. A handful of
//! endpoints (health, auth on older deployments) return bare bodies. The
//! client normalizes both shapes through [`unwrap_data`]: enveloped bodies
//! yield their `data` field unchanged, bare bodies are returned as-is.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend response wrapper of shape `{ data, error?, message? }`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Envelope {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// Best error description carried by the envelope, if any.
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

/// Unwrap a response body to its domain payload.
///
/// If `body` is a JSON object carrying a `"data"` key, that value is returned
/// exactly as received. Any other body (array, string, or an object without
/// the envelope key) is returned unchanged.
pub fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_enveloped_object() {
        let body = json!({"data": {"id": 7, "address": "0xabc"}});
        assert_eq!(unwrap_data(body), json!({"id": 7, "address": "0xabc"}));
    }

    #[test]
    fn test_unwrap_enveloped_array() {
        let body = json!({"data": [1, 2, 3]});
        assert_eq!(unwrap_data(body), json!([1, 2, 3]));
    }

    #[test]
    fn test_unwrap_enveloped_string() {
        let body = json!({"data": "ok"});
        assert_eq!(unwrap_data(body), json!("ok"));
    }

    #[test]
    fn test_unwrap_bare_body() {
        let body = json!({"status": "healthy", "version": "1.0.0"});
        assert_eq!(unwrap_data(body.clone()), body);

        let list = json!([{"id": 1}]);
        assert_eq!(unwrap_data(list.clone()), list);
    }

    #[test]
    fn test_unwrap_null_data() {
        // An envelope with explicit null data unwraps to null, not to the envelope
        assert_eq!(unwrap_data(json!({"data": null})), Value::Null);
    }

    #[test]
    fn test_error_text_prefers_error_field() {
        let env: Envelope =
            serde_json::from_value(json!({"error": "boom", "message": "detail"})).unwrap();
        assert_eq!(env.error_text(), Some("boom"));

        let env: Envelope = serde_json::from_value(json!({"message": "detail"})).unwrap();
        assert_eq!(env.error_text(), Some("detail"));

        let env: Envelope = serde_json::from_value(json!({"data": 1})).unwrap();
        assert_eq!(env.error_text(), None);
    }
}
