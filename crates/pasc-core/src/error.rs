//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout PASC Data Guardian. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Invalid keys (unknown service, unknown contract type) are rejected
//!   before any composition starts.
//! - Validation errors name the offending field.
//! - Encoding errors carry the character that the document encoding cannot
//!   represent. A render either returns a complete artifact or one of these.

use thiserror::Error;

/// Top-level error type for PASC Data Guardian.
#[derive(Error, Debug)]
pub enum PascError {
    /// The requested service is not in the RAT catalog.
    #[error("unknown catalog service: {0:?}")]
    UnknownService(String),

    /// The contract-type label does not map to a known clause.
    #[error("unknown contract type: {0:?}")]
    UnknownContractType(String),

    /// A required field is empty or whitespace-only.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field contains a control character.
    #[error("field {field} contains control character {ch:?}")]
    InvalidCharacter {
        /// Name of the rejected field.
        field: &'static str,
        /// The offending character.
        ch: char,
    },

    /// Text contains a character the document encoding cannot represent.
    #[error("character {ch:?} cannot be encoded in WinAnsiEncoding")]
    Unencodable {
        /// The character that failed to encode.
        ch: char,
    },

    /// A date string did not match `DD-MM-YYYY`.
    #[error("invalid date {0:?}: expected DD-MM-YYYY")]
    InvalidDate(String),

    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
