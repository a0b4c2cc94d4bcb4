//! # Validated Party Fields
//!
//! Newtype wrappers for the free-text values a caller supplies for a
//! contract annex. You cannot build a `PartyName` or `TaxId` that is blank or
//! carries control characters, so nothing downstream has to re-check.
//!
//! The tax ID (RUT) format and check digit are not verified.

use serde::{Deserialize, Serialize};

use crate::error::PascError;

/// Validate a free-text field that is embedded verbatim into a document.
///
/// The value must be non-empty after trimming and free of control
/// characters (line breaks included). It is returned untouched.
pub fn validate_text<'a>(field: &'static str, value: &'a str) -> Result<&'a str, PascError> {
    if value.trim().is_empty() {
        return Err(PascError::MissingField(field));
    }
    if let Some(ch) = value.chars().find(|c| c.is_control()) {
        return Err(PascError::InvalidCharacter { field, ch });
    }
    Ok(value)
}

/// Legal name of a contracting party ("Razón Social / Nombre").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartyName(String);

/// Tax identifier of a contracting party (RUT). Format unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaxId(String);

impl PartyName {
    /// Validate and wrap a party name.
    pub fn new(value: impl Into<String>) -> Result<Self, PascError> {
        let value = value.into();
        validate_text("name", &value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TaxId {
    /// Validate and wrap a tax identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, PascError> {
        let value = value.into();
        validate_text("tax_id", &value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PartyName {
    type Error = PascError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for TaxId {
    type Error = PascError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartyName> for String {
    fn from(value: PartyName) -> Self {
        value.0
    }
}

impl From<TaxId> for String {
    fn from(value: TaxId) -> Self {
        value.0
    }
}

impl std::fmt::Display for PartyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
