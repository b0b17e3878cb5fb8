//! Conversion between the comma separated search term string shown in the
//! UI and the JSON array sent over the wire.
//!
//! The round trip is lossy for terms that themselves contain a comma:
//! `["a,b"]` comes back from the UI form as `["a", "b"]`.

use crate::models::AlertPayload;

/// Split the UI form on `,` into wire terms. No trimming is applied.
pub fn search_terms_to_wire(comma_separated: &str) -> Vec<String> {
    comma_separated.split(',').map(str::to_string).collect()
}

/// Join wire terms back into the UI form. Embedded commas are not escaped.
pub fn search_terms_from_wire(terms: &[String]) -> String {
    terms.join(",")
}

/// Build the body of an alert save request
pub fn build_alert_payload(id: Option<i64>, message: &str, comma_separated: &str) -> AlertPayload {
    AlertPayload {
        id,
        name: message.to_string(),
        search_terms: search_terms_to_wire(comma_separated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_wire_splits_on_comma() {
        assert_eq!(search_terms_to_wire("a,b"), vec!["a", "b"]);
        assert_eq!(search_terms_to_wire("wool"), vec!["wool"]);
    }

    #[test]
    fn test_to_wire_keeps_empty_terms() {
        assert_eq!(search_terms_to_wire("a,"), vec!["a", ""]);
        assert_eq!(search_terms_to_wire(""), vec![""]);
    }

    #[test]
    fn test_to_wire_json_shape() {
        let json = serde_json::to_string(&search_terms_to_wire("patagonia,wool")).unwrap();
        assert_eq!(json, r#"["patagonia","wool"]"#);
    }

    #[test]
    fn test_roundtrip_without_embedded_commas() {
        for s in ["a,b", "patagonia,sweater,wool", "single", "a,,b"] {
            assert_eq!(search_terms_from_wire(&search_terms_to_wire(s)), s);
        }
    }

    #[test]
    fn test_roundtrip_lossy_with_embedded_commas() {
        let wire = vec!["a,b".to_string(), "c".to_string()];
        let ui = search_terms_from_wire(&wire);
        assert_eq!(ui, "a,b,c");
        assert_ne!(search_terms_to_wire(&ui), wire);
    }

    #[test]
    fn test_build_alert_payload_new() {
        let payload = build_alert_payload(None, "hi", "a,b");
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"name":"hi","search_terms":["a","b"]}"#
        );
    }

    #[test]
    fn test_build_alert_payload_existing() {
        let payload = build_alert_payload(Some(7), "hi", "a,b");
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"id":7,"name":"hi","search_terms":["a","b"]}"#
        );
    }
}
