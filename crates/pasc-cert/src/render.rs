//! # Certificate Renderer
//!
//! Lays out a composed body on A4 pages and serializes the result as PDF.
//!
//! ## Layout
//!
//! ```text
//!  CERTIFICADO DE CUMPLIMIENTO: <KIND>          bold 12, centered
//!  Estándar Técnico: <standard>                 oblique 9, centered
//!  ────────────────────────────────────────     rule at 30 mm
//!  body                                         regular 10, 7 mm lines
//!  ...                                          (flows onto new pages)
//!
//!  VALIDACIÓN DE NORMATIVA:                     bold 8, last page,
//!  <regulatory paragraph>                       50 mm from the bottom
//!  ID TRAZABILIDAD PASC: <fingerprint>
//! ```

use pasc_core::{DocumentKind, Fingerprint, PascError};
use pasc_pack::normative::{self, FOOTER_LABEL, FOOTER_TEXT, TRACEABILITY_LABEL};

use crate::pdf::{write_document, Align, Canvas, DocumentInfo, Font, PageGeometry, MM};

/// Name written to the PDF `/Producer` entry.
pub const PRODUCER: &str = "PASC Data Guardian";

/// Page geometry and typography for a certificate. All lengths in points.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub geometry: PageGeometry,
    /// Distance of the header rule from the top edge.
    pub rule_y: f64,
    /// Height reserved at the bottom of the last page for the footer.
    pub footer_reserve: f64,
    pub title_size: f64,
    pub standard_size: f64,
    pub body_size: f64,
    pub body_line_height: f64,
    pub footer_size: f64,
    pub footer_line_height: f64,
    pub producer: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::a4(),
            rule_y: 30.0 * MM,
            footer_reserve: 50.0 * MM,
            title_size: 12.0,
            standard_size: 9.0,
            body_size: 10.0,
            body_line_height: 7.0 * MM,
            footer_size: 8.0,
            footer_line_height: 4.0 * MM,
            producer: PRODUCER.to_string(),
        }
    }
}

/// A rendered PDF and the number of pages it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Render a certificate.
///
/// # Errors
///
/// Returns `PascError::Unencodable` if any text on the page falls outside
/// WinAnsiEncoding. No bytes are produced in that case.
pub fn render_certificate(
    kind: DocumentKind,
    body: &str,
    fingerprint: &Fingerprint,
    options: &RenderOptions,
) -> Result<RenderedPdf, PascError> {
    let g = options.geometry;
    let title = kind.title();
    let mut canvas = Canvas::new(g);

    canvas.set_font(Font::Bold, options.title_size);
    canvas.cell(10.0 * MM, &title, Align::Center)?;
    canvas.set_font(Font::Oblique, options.standard_size);
    canvas.cell(10.0 * MM, &normative::standard_line(), Align::Center)?;

    canvas.hline(options.rule_y, g.margin, g.width - g.margin);
    canvas.set_y(options.rule_y);
    canvas.ln(10.0 * MM);

    canvas.set_font(Font::Regular, options.body_size);
    canvas.set_page_break(g.height - options.footer_reserve);
    canvas.multi_cell(options.body_line_height, body, Align::Left)?;

    canvas.set_page_break(g.height);
    canvas.set_y_from_bottom(options.footer_reserve);
    canvas.set_font(Font::Bold, options.footer_size);
    canvas.cell(5.0 * MM, FOOTER_LABEL, Align::Left)?;
    canvas.set_font(Font::Regular, options.footer_size);
    canvas.multi_cell(options.footer_line_height, FOOTER_TEXT, Align::Center)?;
    canvas.cell(
        10.0 * MM,
        &format!("{TRACEABILITY_LABEL}: {fingerprint}"),
        Align::Center,
    )?;

    let page_count = canvas.page_count();
    let info = DocumentInfo {
        title,
        producer: options.producer.clone(),
    };
    let bytes = write_document(&canvas.finish(), &g, &info)?;
    Ok(RenderedPdf { bytes, page_count })
}
