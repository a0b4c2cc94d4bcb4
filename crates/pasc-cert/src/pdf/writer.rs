//! # PDF Serialization
//!
//! Serializes laid-out pages into a PDF 1.4 file: catalog, page tree, the
//! three standard fonts, an info dictionary, one page object and one
//! uncompressed content stream per page, then the cross-reference table.
//!
//! The output contains no creation timestamp and no file identifier, so the
//! same pages always serialize to the same bytes.

use pasc_core::PascError;

use super::canvas::{escape_into, PageGeometry};
use super::encoding::{encode, Font};

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const FIRST_FONT_ID: usize = 3;
const INFO_ID: usize = FIRST_FONT_ID + Font::ALL.len();
const FIRST_PAGE_ID: usize = INFO_ID + 1;

/// Metadata written to the document info dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub producer: String,
}

/// Append-only object writer that records byte offsets for the xref table.
struct ObjectWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl ObjectWriter {
    fn new() -> Self {
        let mut buf = Vec::new();
        // Binary comment marks the file as 8-bit for transfer tools.
        buf.extend_from_slice(b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    /// Write object `id`. Objects must be written in ascending id order starting at 1.
    fn object(&mut self, id: usize, body: &[u8]) {
        debug_assert_eq!(id, self.offsets.len() + 1);
        self.offsets.push(self.buf.len());
        self.buf.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
        self.buf.extend_from_slice(body);
        self.buf.extend_from_slice(b"\nendobj\n");
    }

    fn stream(&mut self, id: usize, content: &[u8]) {
        let mut body = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(b"\nendstream");
        self.object(id, &body);
    }

    fn finish(mut self) -> Vec<u8> {
        let xref_at = self.buf.len();
        let size = self.offsets.len() + 1;
        let mut tail = format!("xref\n0 {size}\n0000000000 65535 f \n");
        for offset in &self.offsets {
            tail.push_str(&format!("{offset:010} 00000 n \n"));
        }
        tail.push_str(&format!(
            "trailer\n<< /Size {size} /Root {CATALOG_ID} 0 R /Info {INFO_ID} 0 R >>\nstartxref\n{xref_at}\n%%EOF\n"
        ));
        self.buf.extend_from_slice(tail.as_bytes());
        self.buf
    }
}

/// Serialize page content streams into a complete PDF file.
///
/// # Errors
///
/// Returns `PascError::Unencodable` if the title or producer contain
/// characters outside WinAnsiEncoding.
pub fn write_document(
    pages: &[Vec<u8>],
    geometry: &PageGeometry,
    info: &DocumentInfo,
) -> Result<Vec<u8>, PascError> {
    let title = encode(&info.title)?;
    let producer = encode(&info.producer)?;

    let mut w = ObjectWriter::new();
    w.object(
        CATALOG_ID,
        format!("<< /Type /Catalog /Pages {PAGES_ID} 0 R >>").as_bytes(),
    );

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", page_id(i)))
        .collect();
    w.object(
        PAGES_ID,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        )
        .as_bytes(),
    );

    for (i, font) in Font::ALL.iter().enumerate() {
        w.object(
            FIRST_FONT_ID + i,
            format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                font.base_font()
            )
            .as_bytes(),
        );
    }

    let mut info_body = b"<< /Title (".to_vec();
    escape_into(&mut info_body, &title);
    info_body.extend_from_slice(b") /Producer (");
    escape_into(&mut info_body, &producer);
    info_body.extend_from_slice(b") >>");
    w.object(INFO_ID, &info_body);

    let fonts: Vec<String> = Font::ALL
        .iter()
        .enumerate()
        .map(|(i, f)| format!("/{} {} 0 R", f.resource_name(), FIRST_FONT_ID + i))
        .collect();
    let resources = format!("<< /Font << {} >> >>", fonts.join(" "));

    for (i, content) in pages.iter().enumerate() {
        w.object(
            page_id(i),
            format!(
                "<< /Type /Page /Parent {PAGES_ID} 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources {resources} /Contents {} 0 R >>",
                geometry.width,
                geometry.height,
                page_id(i) + 1
            )
            .as_bytes(),
        );
        w.stream(page_id(i) + 1, content);
    }

    Ok(w.finish())
}

fn page_id(index: usize) -> usize {
    FIRST_PAGE_ID + 2 * index
}
