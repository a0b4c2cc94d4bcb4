//! # Document Composer
//!
//! Builds the plain-text body of a certificate. RAT certificates list the
//! catalog record field by field; contract annexes state the execution date
//! and the party, then insert the clause for the contract type verbatim.
//!
//! Field values are embedded exactly as given. Blank values and control
//! characters are rejected before any text is produced.

use serde::Serialize;

use pasc_core::{
    validate_text, ContractType, ExecutionDate, PartyName, PascError, RiskAssessment, Role, TaxId,
};
use pasc_pack::normative::{EXECUTION_CITY, RAT_ATTRIBUTION};
use pasc_pack::{clause, ServiceRecord};

/// The record a RAT certificate is composed from and fingerprinted over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatRequest {
    pub service: String,
    pub role: Role,
    pub data_categories: String,
    pub purpose: String,
    pub legal_basis: String,
    pub risk: RiskAssessment,
}

impl From<&ServiceRecord> for RatRequest {
    fn from(record: &ServiceRecord) -> Self {
        Self {
            service: record.service.clone(),
            role: record.role,
            data_categories: record.data_categories.clone(),
            purpose: record.purpose.clone(),
            legal_basis: record.legal_basis.clone(),
            risk: record.risk.clone(),
        }
    }
}

/// The contracting party; this is the record a contract annex is
/// fingerprinted over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContractParty {
    pub name: PartyName,
    pub tax_id: TaxId,
}

impl ContractParty {
    /// Validate raw form input.
    pub fn new(name: &str, tax_id: &str) -> Result<Self, PascError> {
        Ok(Self {
            name: PartyName::new(name)?,
            tax_id: TaxId::new(tax_id)?,
        })
    }
}

/// Everything a contract annex body needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractRequest {
    pub contract_type: ContractType,
    pub party: ContractParty,
    pub date: ExecutionDate,
}

/// Compose the body of a RAT certificate.
///
/// # Errors
///
/// Returns `PascError::MissingField` or `PascError::InvalidCharacter` if a
/// text field is blank or carries control characters.
pub fn compose_rat(request: &RatRequest) -> Result<String, PascError> {
    let service = validate_text("service", &request.service)?;
    let data = validate_text("data_categories", &request.data_categories)?;
    let purpose = validate_text("purpose", &request.purpose)?;
    let legal_basis = validate_text("legal_basis", &request.legal_basis)?;
    if let Some(qualifier) = &request.risk.qualifier {
        validate_text("risk", qualifier)?;
    }

    Ok(format!(
        "SERVICIO: {service}\n\
         ROL LEGAL: {role}\n\
         CATEGORÍAS DE DATOS: {data}\n\
         FINALIDAD: {purpose}\n\
         BASE DE LEGITIMIDAD: {legal_basis}\n\
         NIVEL DE RIESGO: {risk}\n\
         \n\
         {RAT_ATTRIBUTION}",
        role = request.role,
        risk = request.risk,
    ))
}

/// Compose the body of a contract annex.
pub fn compose_contract(request: &ContractRequest) -> String {
    let clause = clause::lookup(request.contract_type);
    format!(
        "En {EXECUTION_CITY}, a {date}, se regula el tratamiento de datos para:\n\
         PROVEEDOR: {name} (RUT: {tax_id})\n\
         \n\
         OBLIGACIÓN LEGAL INYECTADA:\n\
         {text}",
        date = request.date,
        name = request.party.name,
        tax_id = request.party.tax_id,
        text = clause.text,
    )
}
