//! # Minimal PDF Backend
//!
//! Just enough PDF to print a certificate: standard Helvetica faces with
//! WinAnsiEncoding, left-aligned and centered text, horizontal rules, word
//! wrapping and page breaks. Output is byte-for-byte deterministic.

pub mod canvas;
pub mod encoding;
pub mod writer;

pub use canvas::{Align, Canvas, PageGeometry, MM};
pub use encoding::{encode, Font};
pub use writer::{write_document, DocumentInfo};
