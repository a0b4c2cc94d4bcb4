//! # Certificate Document
//!
//! The result of issuing a certificate: the rendered PDF together with the
//! text and fingerprint that went into it, so callers can log or display
//! what was produced without parsing the PDF.

use pasc_core::{DocumentKind, Fingerprint};

/// An issued certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDocument {
    pub(crate) kind: DocumentKind,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) fingerprint: Fingerprint,
    pub(crate) page_count: usize,
    pub(crate) bytes: Vec<u8>,
}

impl CertificateDocument {
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Title printed at the top of the first page.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Composed body text, before layout.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// The PDF file.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
