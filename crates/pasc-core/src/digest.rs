//! # Content Digest and Fingerprint
//!
//! `ContentDigest` is a SHA-256 digest that can only be computed from
//! `CanonicalBytes`. `Fingerprint` is the short traceability tag printed on
//! every certificate: the first 16 hex characters of a content digest.
//!
//! A fingerprint is 64 bits with no key and no signature. It identifies the
//! input record a document was generated from; it does not prove that the
//! document was not altered.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// Number of hex characters kept in a [`Fingerprint`].
pub const FINGERPRINT_LEN: usize = 16;

/// A SHA-256 digest over canonical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    bytes: [u8; 32],
}

impl ContentDigest {
    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Truncate the digest to a certificate fingerprint.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut hex = self.to_hex();
        hex.truncate(FINGERPRINT_LEN);
        Fingerprint(hex)
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

/// Compute a SHA-256 content digest from canonical bytes.
///
/// Accepts only `&CanonicalBytes`, so every digest in the system is taken
/// over the JCS encoding of a record and never over ad-hoc bytes.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest { bytes }
}

/// Compute a SHA-256 hex string from canonical bytes.
pub fn sha256_hex(data: &CanonicalBytes) -> String {
    sha256_digest(data).to_hex()
}

/// A 16-character lowercase hex traceability tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Access the hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_digest_deterministic() {
        let cb = CanonicalBytes::new(&serde_json::json!({"a": "1", "b": "2"})).unwrap();
        assert_eq!(sha256_digest(&cb), sha256_digest(&cb));
    }

    #[test]
    fn test_known_sha256_vector() {
        let cb = CanonicalBytes::new(&serde_json::json!({})).unwrap();
        assert_eq!(
            sha256_hex(&cb),
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
    }

    #[test]
    fn test_fingerprint_is_hex_prefix() {
        let cb = CanonicalBytes::new(&serde_json::json!({})).unwrap();
        let fp = sha256_digest(&cb).fingerprint();
        assert_eq!(fp.as_str(), "44136fa355b3678a");
        assert_eq!(fp.as_str().len(), FINGERPRINT_LEN);
    }

    #[test]
    fn test_display_prefixes_algorithm() {
        let cb = CanonicalBytes::new(&serde_json::json!({"a": "1"})).unwrap();
        let s = sha256_digest(&cb).to_string();
        assert!(s.starts_with("sha256:"));
        assert_eq!(s.len(), 7 + 64);
    }

    #[test]
    fn test_different_inputs_different_digests() {
        let a = CanonicalBytes::new(&serde_json::json!({"name": "Acme SpA"})).unwrap();
        let b = CanonicalBytes::new(&serde_json::json!({"name": "Acme Ltda"})).unwrap();
        assert_ne!(sha256_digest(&a).fingerprint(), sha256_digest(&b).fingerprint());
    }
}
