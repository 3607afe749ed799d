//! JSON utilities
//!
//! Shared body decoding for the code generators. Decoding preserves object
//! key order (serde_json `preserve_order` feature) so generated literals
//! keep the keys in the order the user wrote them.

/// Try to decode a request body as JSON, preserving key order.
///
/// Returns `None` when the body is not valid JSON; generators then fall
/// back to rendering the body as an opaque string literal. This is a soft
/// fallback, never an error.
pub fn parse_body(body: &str) -> Option<serde_json::Value> {
    serde_json::from_str(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_body() {
        let value = parse_body(r#"{"name": "John", "age": 30}"#).unwrap();
        assert_eq!(value["name"], "John");
    }

    #[test]
    fn test_key_order_preserved() {
        let value = parse_body(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_invalid_body_is_none() {
        assert!(parse_body("plaintext, not json").is_none());
        assert!(parse_body("{truncated").is_none());
        assert!(parse_body("").is_none());
    }
}
