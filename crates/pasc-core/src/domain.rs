//! # Legal Classifications and Document Kinds
//!
//! Closed enumerations for everything a certificate can be about: the legal
//! role a service plays, its risk level, the contract type that selects a
//! clause, and the document kind that titles the certificate. Every `match`
//! is exhaustive, so adding a variant forces every renderer to handle it.

use serde::{Deserialize, Serialize};

use crate::error::PascError;

/// Legal role of a service in a processing activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Determines the purpose and means of processing ("Responsable").
    Responsible,
    /// Processes data on behalf of a responsible party ("Encargado").
    Processor,
}

impl Role {
    /// Spanish label printed on certificates.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Responsible => "Responsable",
            Self::Processor => "Encargado",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Risk classification of a processing activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Spanish label printed on certificates.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "BAJO",
            Self::Medium => "MEDIO",
            Self::High => "ALTO",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A risk level with an optional qualifier, e.g. `ALTO (Infraestructura Crítica)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
}

impl RiskAssessment {
    /// A bare risk level without qualifier.
    pub fn new(level: RiskLevel) -> Self {
        Self {
            level,
            qualifier: None,
        }
    }

    /// A risk level with a parenthesized qualifier.
    pub fn qualified(level: RiskLevel, qualifier: impl Into<String>) -> Self {
        Self {
            level,
            qualifier: Some(qualifier.into()),
        }
    }
}

impl std::fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.qualifier {
            Some(q) => write!(f, "{} ({q})", self.level),
            None => write!(f, "{}", self.level),
        }
    }
}

/// Substring that marks a contract-type label as public procurement.
pub const PROCUREMENT_MARKER: &str = "Compras";

/// Contract type that selects the clause inserted into a contract annex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Public procurement annex ("Compras Públicas (Anexo X)").
    Procurement,
    /// Fee-based services agreement ("Honorarios").
    Fees,
}

/// Accepted contract-type labels. Matching is case-insensitive.
const CONTRACT_LABELS: &[(&str, ContractType)] = &[
    ("Compras Públicas (Anexo X)", ContractType::Procurement),
    ("Compras Publicas (Anexo X)", ContractType::Procurement),
    ("Compras Públicas", ContractType::Procurement),
    ("Compras Publicas", ContractType::Procurement),
    ("procurement", ContractType::Procurement),
    ("Honorarios", ContractType::Fees),
    ("fees", ContractType::Fees),
];

impl ContractType {
    /// All contract types in canonical order.
    pub fn all() -> &'static [ContractType] {
        &[Self::Procurement, Self::Fees]
    }

    /// Canonical label as offered to users.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Procurement => "Compras Públicas (Anexo X)",
            Self::Fees => "Honorarios",
        }
    }

    /// Stable identifier used on the command line and in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Procurement => "procurement",
            Self::Fees => "fees",
        }
    }

    /// Resolve a label through the explicit label table.
    ///
    /// # Errors
    ///
    /// Returns `PascError::UnknownContractType` for labels not in the table.
    pub fn from_label(label: &str) -> Result<Self, PascError> {
        let wanted = label.trim().to_lowercase();
        CONTRACT_LABELS
            .iter()
            .find(|(candidate, _)| candidate.to_lowercase() == wanted)
            .map(|(_, ty)| *ty)
            .ok_or_else(|| PascError::UnknownContractType(label.to_string()))
    }

    /// Classify any label by the procurement marker: labels containing
    /// [`PROCUREMENT_MARKER`] are procurement, everything else is fees.
    ///
    /// New labels must contain or omit the marker unambiguously.
    pub fn from_marker(label: &str) -> Self {
        if label.contains(PROCUREMENT_MARKER) {
            Self::Procurement
        } else {
            Self::Fees
        }
    }
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ContractType {
    type Err = PascError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// What a certificate certifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "contract_type")]
pub enum DocumentKind {
    /// A Registry of Processing Activities entry.
    Rat,
    /// A contract annex carrying the clause for the given type.
    Contract(ContractType),
}

impl DocumentKind {
    /// The label the certificate title is derived from.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rat => "RAT",
            Self::Contract(ty) => ty.label(),
        }
    }

    /// Certificate title, e.g. `CERTIFICADO DE CUMPLIMIENTO: RAT`.
    pub fn title(&self) -> String {
        format!("CERTIFICADO DE CUMPLIMIENTO: {}", self.label().to_uppercase())
    }
}
