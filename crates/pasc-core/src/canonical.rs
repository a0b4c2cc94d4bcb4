//! # Canonical Serialization — JCS Byte Production
//!
//! `CanonicalBytes` is the sole construction path for bytes that feed the
//! certificate fingerprint. Two records with the same keys and values always
//! produce the same byte sequence, regardless of struct field order or map
//! insertion order.
//!
//! ## Rules
//!
//! 1. **Reject floats** — records carry strings and integers only.
//! 2. **Sorted keys, compact separators** — RFC 8785 (JSON Canonicalization
//!    Scheme) via `serde_jcs`.
//! 3. **UTF-8 passthrough** — accented characters are emitted as-is, never
//!    `\u` escaped.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - No float numbers appear in the encoded value.
/// - Object keys are sorted, separators are compact.
///
/// The inner `Vec<u8>` is private so downstream code cannot build one by hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::FloatRejected` if the value contains a
    /// float, or `CanonicalizationError::SerializationFailed` if the value
    /// cannot be represented as JSON.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        reject_floats(&value)?;
        let s = serde_jcs::to_string(&value)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

fn reject_floats(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(n) => {
            if n.is_f64() {
                if let Some(f) = n.as_f64() {
                    return Err(CanonicalizationError::FloatRejected(f));
                }
            }
            Ok(())
        }
        Value::Object(map) => map.values().try_for_each(reject_floats),
        Value::Array(arr) => arr.iter().try_for_each(reject_floats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_keys_compact() {
        let data = serde_json::json!({"tax_id": "76.123.456-7", "name": "Acme SpA"});
        let cb = CanonicalBytes::new(&data).expect("should canonicalize");
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, r#"{"name":"Acme SpA","tax_id":"76.123.456-7"}"#);
    }

    #[test]
    fn test_nested_objects_sorted() {
        let data = serde_json::json!({
            "risk": {"qualifier": "Infraestructura Crítica", "level": "high"},
            "role": "responsible"
        });
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(
            s,
            r#"{"risk":{"level":"high","qualifier":"Infraestructura Crítica"},"role":"responsible"}"#
        );
    }

    #[test]
    fn test_float_rejection() {
        let data = serde_json::json!({"amount": 1.5});
        match CanonicalBytes::new(&data).unwrap_err() {
            CanonicalizationError::FloatRejected(f) => assert_eq!(f, 1.5),
            other => panic!("Expected FloatRejected, got: {other}"),
        }
    }

    #[test]
    fn test_deeply_nested_float_rejected() {
        let data = serde_json::json!({"a": {"b": [{"c": 3.25}]}});
        assert!(CanonicalBytes::new(&data).is_err());
    }

    #[test]
    fn test_integer_accepted() {
        let data = serde_json::json!({"pages": 2});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(cb.as_bytes(), br#"{"pages":2}"#);
    }

    #[test]
    fn test_null_passthrough() {
        let data = serde_json::json!({"qualifier": null});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(cb.as_bytes(), br#"{"qualifier":null}"#);
    }

    #[test]
    fn test_unicode_not_escaped() {
        let data = serde_json::json!({"service": "ClaveÚnica"});
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert!(s.contains("ClaveÚnica"));
    }

    #[test]
    fn test_empty_object() {
        let cb = CanonicalBytes::new(&serde_json::json!({})).unwrap();
        assert_eq!(cb.as_bytes(), b"{}");
        assert!(!cb.is_empty());
        assert_eq!(cb.len(), 2);
    }
}
