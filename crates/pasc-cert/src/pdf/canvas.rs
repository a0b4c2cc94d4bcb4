//! # Canvas — Cursor-Based Page Layout
//!
//! A top-down cursor over a stack of pages. Callers place full-width cells
//! (single line) and multi-line cells (word wrapped); the canvas encodes the
//! text, measures it, and appends PDF content-stream operators to the
//! current page. Vertical positions are measured from the top edge, in
//! points; conversion to PDF's bottom-left origin happens only when an
//! operator is emitted.

use pasc_core::PascError;

use super::encoding::{encode, Font};

/// Points per millimetre.
pub const MM: f64 = 72.0 / 25.4;

/// Page size and margins, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    /// Left, right and top margin.
    pub margin: f64,
    /// Horizontal padding inside a cell.
    pub cell_padding: f64,
}

impl PageGeometry {
    /// A4 portrait with 10 mm margins and 1 mm cell padding.
    pub fn a4() -> Self {
        Self {
            width: 210.0 * MM,
            height: 297.0 * MM,
            margin: 10.0 * MM,
            cell_padding: 1.0 * MM,
        }
    }

    /// Width available to text inside a full-width cell.
    pub fn text_width(&self) -> f64 {
        self.width - 2.0 * self.margin - 2.0 * self.cell_padding
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Horizontal alignment of text inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Layout cursor over one or more pages.
#[derive(Debug)]
pub struct Canvas {
    geometry: PageGeometry,
    pages: Vec<Vec<u8>>,
    y: f64,
    font: Font,
    size: f64,
    break_at: f64,
}

impl Canvas {
    /// Start a canvas with one empty page and the cursor at the top margin.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![Vec::new()],
            y: geometry.margin,
            font: Font::Regular,
            size: 10.0,
            break_at: geometry.height - geometry.margin,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Current cursor position, from the top edge.
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn set_font(&mut self, font: Font, size: f64) {
        self.font = font;
        self.size = size;
    }

    /// Move the cursor to an absolute position from the top edge.
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Move the cursor to a position measured from the bottom edge.
    pub fn set_y_from_bottom(&mut self, distance: f64) {
        self.y = self.geometry.height - distance;
    }

    /// Cells that would extend past `y` (from the top) start a new page.
    pub fn set_page_break(&mut self, y: f64) {
        self.break_at = y;
    }

    /// Advance the cursor.
    pub fn ln(&mut self, h: f64) {
        self.y += h;
    }

    /// Draw a horizontal rule at `y` (from the top) between `x1` and `x2`.
    pub fn hline(&mut self, y: f64, x1: f64, x2: f64) {
        let pdf_y = self.geometry.height - y;
        // 0.2 mm stroke.
        let op = format!(
            "{:.2} w {x1:.2} {pdf_y:.2} m {x2:.2} {pdf_y:.2} l S\n",
            0.2 * MM
        );
        self.current_page().extend_from_slice(op.as_bytes());
    }

    /// One full-width line of text; the cursor moves down by `h`.
    pub fn cell(&mut self, h: f64, text: &str, align: Align) -> Result<(), PascError> {
        let encoded = encode(text)?;
        self.break_if_needed(h);
        self.draw_line(h, &encoded, align);
        self.y += h;
        Ok(())
    }

    /// Word-wrapped text; each `\n` starts a new line and each wrapped line
    /// advances the cursor by `h`, breaking pages as needed.
    pub fn multi_cell(&mut self, h: f64, text: &str, align: Align) -> Result<(), PascError> {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            let encoded = encode(paragraph)?;
            lines.extend(self.wrap(&encoded));
        }
        for line in &lines {
            self.break_if_needed(h);
            self.draw_line(h, line, align);
            self.y += h;
        }
        Ok(())
    }

    /// Consume the canvas, returning one content stream per page.
    pub fn finish(self) -> Vec<Vec<u8>> {
        self.pages
    }

    fn break_if_needed(&mut self, h: f64) {
        if self.y + h > self.break_at {
            self.pages.push(Vec::new());
            self.y = self.geometry.margin;
        }
    }

    fn current_page(&mut self) -> &mut Vec<u8> {
        // `pages` starts non-empty and only ever grows.
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn draw_line(&mut self, h: f64, encoded: &[u8], align: Align) {
        if encoded.is_empty() {
            return;
        }
        let g = self.geometry;
        let text_w = self.font.text_width(encoded, self.size);
        let x = match align {
            Align::Left => g.margin + g.cell_padding,
            Align::Center => g.margin + (g.width - 2.0 * g.margin - text_w) / 2.0,
        };
        let baseline = g.height - (self.y + h / 2.0 + 0.3 * self.size);
        let op = format!(
            "BT /{} {:.2} Tf {x:.2} {baseline:.2} Td (",
            self.font.resource_name(),
            self.size
        );
        let page = self.current_page();
        page.extend_from_slice(op.as_bytes());
        escape_into(page, encoded);
        page.extend_from_slice(b") Tj ET\n");
    }

    /// Greedy word wrap of one paragraph. Runs of spaces are kept as given
    /// except where a line breaks, where the run is dropped. Words wider
    /// than a line are split by character. An empty paragraph yields one
    /// empty line.
    fn wrap(&self, paragraph: &[u8]) -> Vec<Vec<u8>> {
        let max = self.geometry.text_width();
        let fits = |bytes: &[u8]| self.font.text_width(bytes, self.size) <= max;
        let mut lines = Vec::new();
        let mut current: Vec<u8> = Vec::new();
        let mut rest = paragraph;

        while !rest.is_empty() {
            let gap = rest.iter().take_while(|b| **b == b' ').count();
            let (spaces, tail) = rest.split_at(gap);
            let len = tail.iter().take_while(|b| **b != b' ').count();
            let (word, next) = tail.split_at(len);
            rest = next;

            let mut candidate = current.clone();
            candidate.extend_from_slice(spaces);
            candidate.extend_from_slice(word);
            if fits(&candidate) {
                current = candidate;
                continue;
            }
            if word.is_empty() {
                // Trailing run past the right edge.
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if fits(word) {
                current = word.to_vec();
                continue;
            }
            // One byte per glyph in WinAnsi, so splitting bytes splits characters.
            for &b in word {
                current.push(b);
                if !fits(&current) {
                    current.pop();
                    lines.push(std::mem::replace(&mut current, vec![b]));
                }
            }
        }
        if !current.is_empty() || lines.is_empty() {
            lines.push(current);
        }
        lines
    }
}

/// Append bytes to a PDF literal string, escaping delimiters.
pub(crate) fn escape_into(out: &mut Vec<u8>, bytes: &[u8]) {
    for &b in bytes {
        if matches!(b, b'(' | b')' | b'\\') {
            out.push(b'\\');
        }
        out.push(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(canvas: Canvas) -> String {
        let pages = canvas.finish();
        String::from_utf8_lossy(&pages.concat()).into_owned()
    }

    #[test]
    fn a4_geometry() {
        let g = PageGeometry::a4();
        assert!((g.width - 595.28).abs() < 0.01);
        assert!((g.height - 841.89).abs() < 0.01);
    }

    #[test]
    fn cell_advances_cursor_and_emits_text() {
        let mut c = Canvas::new(PageGeometry::a4());
        let start = c.y();
        c.set_font(Font::Bold, 12.0);
        c.cell(10.0 * MM, "TITULO", Align::Center).unwrap();
        assert!((c.y() - start - 10.0 * MM).abs() < 1e-9);
        let s = content(c);
        assert!(s.contains("/F2 12.00 Tf"));
        assert!(s.contains("(TITULO) Tj"));
    }

    #[test]
    fn parentheses_are_escaped() {
        let mut c = Canvas::new(PageGeometry::a4());
        c.cell(10.0, r"ALTO (Crítica) \ x", Align::Left).unwrap();
        let pages = c.finish();
        let needle: &[u8] = b"(ALTO \\(Cr\xedtica\\) \\\\ x) Tj";
        assert!(pages[0].windows(needle.len()).any(|w| w == needle));
    }

    #[test]
    fn multi_cell_wraps_long_paragraphs() {
        let mut c = Canvas::new(PageGeometry::a4());
        let text = "palabra ".repeat(80);
        let start = c.y();
        c.multi_cell(7.0 * MM, &text, Align::Left).unwrap();
        let lines = ((c.y() - start) / (7.0 * MM)).round() as usize;
        assert!(lines > 1, "expected wrapping, got {lines} line(s)");
    }

    #[test]
    fn wrapped_lines_fit_the_page() {
        let c = Canvas::new(PageGeometry::a4());
        let text = encode(&"Ley N° 21.719 ".repeat(40)).unwrap();
        for line in c.wrap(&text) {
            assert!(Font::Regular.text_width(&line, 10.0) <= c.geometry().text_width());
        }
    }

    #[test]
    fn overlong_word_is_split() {
        let c = Canvas::new(PageGeometry::a4());
        let word = vec![b'W'; 200];
        let lines = c.wrap(&word);
        assert!(lines.len() > 1);
        assert_eq!(lines.iter().map(Vec::len).sum::<usize>(), 200);
    }

    #[test]
    fn space_runs_are_kept_within_a_line() {
        let c = Canvas::new(PageGeometry::a4());
        assert_eq!(
            c.wrap(b"PROVEEDOR:  Acme  SpA"),
            vec![b"PROVEEDOR:  Acme  SpA".to_vec()]
        );
        assert_eq!(c.wrap(b"  sangria"), vec![b"  sangria".to_vec()]);
    }

    #[test]
    fn space_run_is_dropped_at_a_break() {
        let c = Canvas::new(PageGeometry::a4());
        let text = "palabra   ".repeat(60);
        let lines = c.wrap(text.as_bytes());
        assert!(lines.len() > 1);
        for line in &lines[1..] {
            assert_ne!(line.first(), Some(&b' '));
        }
        let words: usize = lines
            .iter()
            .map(|l| l.split(|b| *b == b' ').filter(|w| !w.is_empty()).count())
            .sum();
        assert_eq!(words, 60);
    }

    #[test]
    fn empty_paragraph_keeps_blank_line() {
        let mut c = Canvas::new(PageGeometry::a4());
        let start = c.y();
        c.multi_cell(10.0, "a\n\nb", Align::Left).unwrap();
        assert!((c.y() - start - 30.0).abs() < 1e-9);
    }

    #[test]
    fn page_break_starts_new_page_at_margin() {
        let g = PageGeometry::a4();
        let mut c = Canvas::new(g);
        c.set_page_break(g.height - 50.0 * MM);
        for _ in 0..60 {
            c.cell(7.0 * MM, "linea", Align::Left).unwrap();
        }
        assert!(c.page_count() > 1);
        assert!(c.y() <= g.height - 50.0 * MM);
    }

    #[test]
    fn encoding_error_propagates() {
        let mut c = Canvas::new(PageGeometry::a4());
        assert!(matches!(
            c.multi_cell(7.0, "ok\n漢字", Align::Left),
            Err(PascError::Unencodable { ch: '漢' })
        ));
    }

    #[test]
    fn operators_are_exact() {
        let mut c = Canvas::new(PageGeometry::a4());
        c.cell(10.0, "x", Align::Left).unwrap();
        c.hline(30.0 * MM, 10.0 * MM, 200.0 * MM);
        assert_eq!(
            content(c),
            "BT /F1 10.00 Tf 31.18 805.54 Td (x) Tj ET\n\
             0.57 w 28.35 756.85 m 566.93 756.85 l S\n"
        );
    }

    #[test]
    fn hline_emits_stroke() {
        let mut c = Canvas::new(PageGeometry::a4());
        c.hline(30.0 * MM, 10.0 * MM, 200.0 * MM);
        let s = content(c);
        assert!(s.contains(" m "));
        assert!(s.ends_with(" l S\n"));
    }
}
