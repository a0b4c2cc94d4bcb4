//! # Output — where rendered certificates go.
//!
//! Certificates are written into the output directory under a name derived
//! from the service or tax ID, or streamed to stdout with `--stdout`.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Destination of a rendered PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write `<dir>/<file name>`.
    Directory(PathBuf),
    /// Write the raw bytes to stdout.
    Stdout,
}

impl OutputTarget {
    pub fn new(output_dir: &Path, stdout: bool) -> Self {
        if stdout {
            Self::Stdout
        } else {
            Self::Directory(output_dir.to_path_buf())
        }
    }
}

/// File name for a RAT certificate.
pub fn rat_file_name(service: &str) -> String {
    format!("RAT_{}.pdf", file_safe(service))
}

/// File name for a contract annex.
pub fn contract_file_name(tax_id: &str) -> String {
    format!("Anexo_Legal_{}.pdf", file_safe(tax_id))
}

/// Replace characters that would escape the output directory.
fn file_safe(component: &str) -> String {
    component
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect()
}

/// Write `bytes` to `target`. Returns the path written, if any.
pub fn write_pdf(target: &OutputTarget, file_name: &str, bytes: &[u8]) -> Result<Option<PathBuf>> {
    match target {
        OutputTarget::Stdout => {
            let mut out = std::io::stdout().lock();
            out.write_all(bytes).context("failed to write PDF to stdout")?;
            out.flush().context("failed to flush stdout")?;
            Ok(None)
        }
        OutputTarget::Directory(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
            let path = dir.join(file_name);
            std::fs::write(&path, bytes)
                .with_context(|| format!("failed to write certificate: {}", path.display()))?;
            Ok(Some(path))
        }
    }
}
