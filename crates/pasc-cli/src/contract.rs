//! # Contract — legal annex for a contracting party.
//!
//! ```bash
//! pasc contract --type "Compras Públicas (Anexo X)" --name "Acme SpA" --rut 76.123.456-7
//! pasc contract --type honorarios --name "Juan Pérez" --rut 12.345.678-9 --date 01-03-2026
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use pasc_cert::ContractParty;
use pasc_core::{ContractType, ExecutionDate};

use crate::output::{contract_file_name, write_pdf, OutputTarget};

/// Arguments for `pasc contract`.
#[derive(Args, Debug)]
pub struct ContractArgs {
    /// Contract type label, e.g. "Compras Públicas (Anexo X)" or "Honorarios".
    #[arg(long = "type", value_name = "LABEL")]
    pub contract_type: String,

    /// Legal name of the contracting party.
    #[arg(long)]
    pub name: String,

    /// Tax ID (RUT) of the contracting party. Not validated.
    #[arg(long)]
    pub rut: String,

    /// Execution date, DD-MM-YYYY. Defaults to today.
    #[arg(long)]
    pub date: Option<String>,

    /// Write the PDF to stdout instead of the output directory.
    #[arg(long)]
    pub stdout: bool,
}

/// Execute `pasc contract`.
pub fn run_contract(args: &ContractArgs, output_dir: &Path) -> Result<u8> {
    let contract_type = ContractType::from_label(&args.contract_type)?;
    let party = ContractParty::new(&args.name, &args.rut).context("invalid contracting party")?;
    let date = match &args.date {
        Some(s) => ExecutionDate::parse(s)?,
        None => ExecutionDate::today(),
    };
    tracing::debug!(contract_type = contract_type.as_str(), %date, "composing contract annex");

    let doc = pasc_cert::issue_contract_certificate(contract_type, &party, date)
        .context("cannot issue contract annex")?;

    tracing::info!(
        contract_type = contract_type.as_str(),
        rut = %party.tax_id,
        fingerprint = %doc.fingerprint(),
        pages = doc.page_count(),
        "issued contract annex"
    );

    let target = OutputTarget::new(output_dir, args.stdout);
    if let Some(path) = write_pdf(&target, &contract_file_name(&args.rut), doc.as_bytes())? {
        println!("{}", path.display());
    }
    Ok(0)
}
