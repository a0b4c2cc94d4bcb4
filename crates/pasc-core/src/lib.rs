//! # pasc-core — Foundational Types for PASC Data Guardian
//!
//! Every other crate in the workspace depends on `pasc-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enumerations for legal classifications.** `Role`,
//!    `RiskLevel`, `ContractType` and `DocumentKind` are enums with
//!    exhaustive `match` everywhere. Contract types are resolved from labels
//!    through an explicit table, not by ad-hoc string tests.
//!
//! 2. **Validated newtypes for caller-supplied text.** `PartyName` and
//!    `TaxId` cannot be blank and cannot carry control characters.
//!
//! 3. **`CanonicalBytes` newtype.** Fingerprints are computed only over the
//!    JCS encoding of a record, so the same record always yields the same
//!    fingerprint.
//!
//! 4. **Pinned date format.** `ExecutionDate` always prints `DD-MM-YYYY`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pasc-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod domain;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, sha256_hex, ContentDigest, Fingerprint, FINGERPRINT_LEN};
pub use domain::{
    ContractType, DocumentKind, RiskAssessment, RiskLevel, Role, PROCUREMENT_MARKER,
};
pub use error::{CanonicalizationError, PascError};
pub use identity::{validate_text, PartyName, TaxId};
pub use temporal::ExecutionDate;
