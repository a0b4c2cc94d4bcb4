//! # Integrity Stamp
//!
//! A certificate carries a short fingerprint of the record it was produced
//! from: SHA-256 over the JCS canonical encoding, truncated to
//! [`FINGERPRINT_LEN`](pasc_core::FINGERPRINT_LEN) hex characters.
//!
//! The fingerprint is a traceability tag. It is not a signature and proves
//! nothing about who produced the document.

use serde::Serialize;

use pasc_core::{sha256_digest, CanonicalBytes, Fingerprint, PascError};

/// Fingerprint a record.
///
/// # Errors
///
/// Returns `PascError::Canonicalization` if the record cannot be encoded as
/// canonical JSON (for example, it contains a float).
pub fn stamp(record: &impl Serialize) -> Result<Fingerprint, PascError> {
    let canonical = CanonicalBytes::new(record)?;
    Ok(sha256_digest(&canonical).fingerprint())
}
