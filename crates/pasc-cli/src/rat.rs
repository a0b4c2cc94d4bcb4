//! # RAT — certificate for a catalog service.
//!
//! ```bash
//! pasc rat ClaveÚnica
//! pasc --output-dir out/ rat FirmaGob
//! pasc rat DocDigital --stdout > rat.pdf
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use crate::output::{rat_file_name, write_pdf, OutputTarget};

/// Arguments for `pasc rat`.
#[derive(Args, Debug)]
pub struct RatArgs {
    /// Catalog service name (exact, e.g. "ClaveÚnica").
    pub service: String,

    /// Write the PDF to stdout instead of the output directory.
    #[arg(long)]
    pub stdout: bool,
}

/// Execute `pasc rat`.
pub fn run_rat(args: &RatArgs, output_dir: &Path) -> Result<u8> {
    let doc = pasc_cert::issue_catalog_certificate(&args.service)
        .with_context(|| format!("cannot issue RAT certificate for '{}'", args.service))?;

    tracing::info!(
        service = %args.service,
        fingerprint = %doc.fingerprint(),
        pages = doc.page_count(),
        "issued RAT certificate"
    );

    let target = OutputTarget::new(output_dir, args.stdout);
    if let Some(path) = write_pdf(&target, &rat_file_name(&args.service), doc.as_bytes())? {
        println!("{}", path.display());
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_rat_certificate_file() {
        let tmp = tempfile::tempdir().unwrap();
        let args = RatArgs {
            service: "FirmaGob".to_string(),
            stdout: false,
        };
        assert_eq!(run_rat(&args, tmp.path()).unwrap(), 0);
        let bytes = std::fs::read(tmp.path().join("RAT_FirmaGob.pdf")).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert_eq!(bytes, pasc_cert::render_catalog_certificate("FirmaGob").unwrap());
    }

    #[test]
    fn unknown_service_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let args = RatArgs {
            service: "Unknown".to_string(),
            stdout: false,
        };
        let err = run_rat(&args, tmp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("unknown catalog service"));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}
