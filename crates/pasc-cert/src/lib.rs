//! # pasc-cert — Compliance Certificates
//!
//! Turns catalog records and contract parties into certificate PDFs:
//!
//! - **Composer** (`composer.rs`): builds the body text of a RAT certificate
//!   or a contract annex.
//!
//! - **Stamp** (`stamp.rs`): the traceability fingerprint printed on every
//!   certificate.
//!
//! - **Render** (`render.rs`): page layout (header, body, legal footer).
//!
//! - **PDF** (`pdf/`): WinAnsi encoding, the layout canvas and the
//!   deterministic PDF 1.4 writer.
//!
//! ## Entry Points
//!
//! [`render_catalog_certificate`] and [`render_contract_certificate`] take
//! the raw values a form collects and return PDF bytes. The `issue_*`
//! variants take typed inputs and an explicit date, and return a
//! [`CertificateDocument`] that also carries the body and fingerprint.
//!
//! ## Crate Policy
//!
//! - Depends on `pasc-core` and `pasc-pack` internally.
//! - Pure functions of their inputs (plus today's date where stated). No I/O,
//!   no logging, no shared mutable state.
//! - Inputs are validated before any text is composed; a failed call
//!   produces no bytes.

pub mod composer;
pub mod document;
pub mod pdf;
pub mod render;
pub mod stamp;

pub use composer::{compose_contract, compose_rat, ContractParty, ContractRequest, RatRequest};
pub use document::CertificateDocument;
pub use render::{render_certificate, RenderOptions, RenderedPdf};
pub use stamp::stamp;

use pasc_core::{ContractType, DocumentKind, ExecutionDate, PascError};
use pasc_pack::catalog;

/// Issue the RAT certificate for a catalog service.
///
/// # Errors
///
/// Returns `PascError::UnknownService` if `service_name` is not a catalog
/// key, or a validation/encoding error from composition and rendering.
pub fn issue_catalog_certificate(service_name: &str) -> Result<CertificateDocument, PascError> {
    issue_catalog_certificate_with(service_name, &RenderOptions::default())
}

/// [`issue_catalog_certificate`] with explicit render options.
pub fn issue_catalog_certificate_with(
    service_name: &str,
    options: &RenderOptions,
) -> Result<CertificateDocument, PascError> {
    let record = catalog::lookup(service_name)?;
    let request = RatRequest::from(record);
    let body = compose_rat(&request)?;
    let fingerprint = stamp(&request)?;
    finish(DocumentKind::Rat, body, fingerprint, options)
}

/// Issue a contract annex for `party`, dated `date`.
///
/// # Errors
///
/// Returns `PascError::Unencodable` if the party data cannot be printed.
pub fn issue_contract_certificate(
    contract_type: ContractType,
    party: &ContractParty,
    date: ExecutionDate,
) -> Result<CertificateDocument, PascError> {
    issue_contract_certificate_with(contract_type, party, date, &RenderOptions::default())
}

/// [`issue_contract_certificate`] with explicit render options.
pub fn issue_contract_certificate_with(
    contract_type: ContractType,
    party: &ContractParty,
    date: ExecutionDate,
    options: &RenderOptions,
) -> Result<CertificateDocument, PascError> {
    let request = ContractRequest {
        contract_type,
        party: party.clone(),
        date,
    };
    let body = compose_contract(&request);
    let fingerprint = stamp(party)?;
    finish(DocumentKind::Contract(contract_type), body, fingerprint, options)
}

/// Render the RAT certificate for a catalog service.
///
/// # Errors
///
/// Returns `PascError::UnknownService` for names not in the catalog.
pub fn render_catalog_certificate(service_name: &str) -> Result<Vec<u8>, PascError> {
    issue_catalog_certificate(service_name).map(CertificateDocument::into_bytes)
}

/// Render a contract annex dated today (local time).
///
/// # Errors
///
/// Returns `PascError::UnknownContractType` for labels outside the label
/// table, `PascError::MissingField` / `PascError::InvalidCharacter` for bad
/// party data, and `PascError::Unencodable` for text that cannot be printed.
pub fn render_contract_certificate(
    label: &str,
    party_name: &str,
    party_tax_id: &str,
) -> Result<Vec<u8>, PascError> {
    let contract_type = ContractType::from_label(label)?;
    let party = ContractParty::new(party_name, party_tax_id)?;
    issue_contract_certificate(contract_type, &party, ExecutionDate::today())
        .map(CertificateDocument::into_bytes)
}

fn finish(
    kind: DocumentKind,
    body: String,
    fingerprint: pasc_core::Fingerprint,
    options: &RenderOptions,
) -> Result<CertificateDocument, PascError> {
    let rendered = render_certificate(kind, &body, &fingerprint, options)?;
    Ok(CertificateDocument {
        kind,
        title: kind.title(),
        body,
        fingerprint,
        page_count: rendered.page_count,
        bytes: rendered.bytes,
    })
}
