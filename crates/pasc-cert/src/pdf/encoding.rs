//! # WinAnsiEncoding and Helvetica Metrics
//!
//! Certificates use the three standard Helvetica faces, which every PDF
//! viewer ships, with `/WinAnsiEncoding`. That covers ASCII, Latin-1 (all
//! Spanish accented letters, `°`, `¿`, `¡`) and the typographic extras of
//! code page 1252. Anything else is rejected, never substituted.

use pasc_core::PascError;

/// One of the standard Type1 fonts used on a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Regular,
    Bold,
    Oblique,
}

impl Font {
    /// All fonts, in resource-number order.
    pub const ALL: [Font; 3] = [Font::Regular, Font::Bold, Font::Oblique];

    /// PostScript name of the standard font.
    pub fn base_font(&self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
            Self::Oblique => "Helvetica-Oblique",
        }
    }

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
            Self::Oblique => "F3",
        }
    }

    /// Advance width of an encoded byte, in 1/1000 em.
    pub fn glyph_width(&self, byte: u8) -> u16 {
        let bold = matches!(self, Self::Bold);
        match byte {
            0x20..=0x7e => {
                let table = if bold { &BOLD_ASCII } else { &REGULAR_ASCII };
                table[usize::from(byte - 0x20)]
            }
            _ => high_width(bold, byte),
        }
    }

    /// Width of an encoded string at the given font size, in points.
    pub fn text_width(&self, encoded: &[u8], size: f64) -> f64 {
        let units: u32 = encoded.iter().map(|b| u32::from(self.glyph_width(*b))).sum();
        f64::from(units) * size / 1000.0
    }
}

/// Encode text as WinAnsi bytes.
///
/// # Errors
///
/// Returns `PascError::Unencodable` for the first character outside
/// WinAnsiEncoding, including control characters.
pub fn encode(text: &str) -> Result<Vec<u8>, PascError> {
    text.chars()
        .map(|ch| encode_char(ch).ok_or(PascError::Unencodable { ch }))
        .collect()
}

fn encode_char(ch: char) -> Option<u8> {
    let code = u32::from(ch);
    match code {
        0x20..=0x7e | 0xa0..=0xff => u8::try_from(code).ok(),
        _ => CP1252_EXTRAS
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, b)| *b),
    }
}

/// Code points that code page 1252 places in 0x80..=0x9F.
const CP1252_EXTRAS: [(char, u8); 27] = [
    ('\u{20ac}', 0x80),
    ('\u{201a}', 0x82),
    ('\u{0192}', 0x83),
    ('\u{201e}', 0x84),
    ('\u{2026}', 0x85),
    ('\u{2020}', 0x86),
    ('\u{2021}', 0x87),
    ('\u{02c6}', 0x88),
    ('\u{2030}', 0x89),
    ('\u{0160}', 0x8a),
    ('\u{2039}', 0x8b),
    ('\u{0152}', 0x8c),
    ('\u{017d}', 0x8e),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201c}', 0x93),
    ('\u{201d}', 0x94),
    ('\u{2022}', 0x95),
    ('\u{2013}', 0x96),
    ('\u{2014}', 0x97),
    ('\u{02dc}', 0x98),
    ('\u{2122}', 0x99),
    ('\u{0161}', 0x9a),
    ('\u{203a}', 0x9b),
    ('\u{0153}', 0x9c),
    ('\u{017e}', 0x9e),
    ('\u{0178}', 0x9f),
];

// Helvetica AFM widths for 0x20..=0x7E.
const REGULAR_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 0x70
];

// Helvetica-Bold AFM widths for 0x20..=0x7E.
const BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 0x70
];

/// Widths above 0x7F. Accented letters take the width of their base letter.
fn high_width(bold: bool, byte: u8) -> u16 {
    let base = |ascii: u8| {
        let table = if bold { &BOLD_ASCII } else { &REGULAR_ASCII };
        table[usize::from(ascii - 0x20)]
    };
    match byte {
        0xc0..=0xc5 => base(b'A'),
        0xc7 => base(b'C'),
        0xc8..=0xcb => base(b'E'),
        0xcc..=0xcf => base(b'I'),
        0xd0 => base(b'D'),
        0xd1 => base(b'N'),
        0xd2..=0xd6 | 0xd8 => base(b'O'),
        0xd9..=0xdc => base(b'U'),
        0xdd => base(b'Y'),
        0xde => base(b'P'),
        0xe0..=0xe5 => base(b'a'),
        0xe7 => base(b'c'),
        0xe8..=0xeb => base(b'e'),
        0xec..=0xef => 278,
        0xf1 => base(b'n'),
        0xf2..=0xf6 | 0xf8 => base(b'o'),
        0xf9..=0xfc => base(b'u'),
        0xfd | 0xff => base(b'y'),
        0xfe => base(b'p'),
        0xc6 | 0x85 | 0x97 | 0x89 | 0x99 => 1000,
        0xe6 => 889,
        0xa0 => 278,
        0xa1 => 333,
        0xaa => 370,
        0xb0 => 400,
        0xb7 => 278,
        0xba => 365,
        0xbf => 611,
        0xd7 | 0xf7 => 584,
        0x91 | 0x92 | 0x82 => if bold { 278 } else { 222 },
        0x93 | 0x94 | 0x84 => if bold { 500 } else { 333 },
        0x95 => 350,
        _ => 556,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(encode("RUT: 76.123.456-7").unwrap(), b"RUT: 76.123.456-7");
    }

    #[test]
    fn spanish_letters_map_to_latin1() {
        assert_eq!(encode("Ú").unwrap(), vec![0xda]);
        assert_eq!(encode("ñ").unwrap(), vec![0xf1]);
        assert_eq!(encode("N°").unwrap(), vec![b'N', 0xb0]);
        assert_eq!(encode("¿Sí?").unwrap(), vec![0xbf, b'S', 0xed, b'?']);
    }

    #[test]
    fn cp1252_extras_map_to_high_bytes() {
        assert_eq!(encode("€").unwrap(), vec![0x80]);
        assert_eq!(encode("“x”").unwrap(), vec![0x93, b'x', 0x94]);
        assert_eq!(encode("…").unwrap(), vec![0x85]);
    }

    #[test]
    fn unsupported_characters_fail() {
        match encode("Firma 漢") {
            Err(PascError::Unencodable { ch }) => assert_eq!(ch, '漢'),
            other => panic!("expected Unencodable, got {other:?}"),
        }
        assert!(encode("emoji \u{1f1e8}\u{1f1f1}").is_err());
        assert!(encode("tab\there").is_err());
        assert!(encode("line\nbreak").is_err());
    }

    #[test]
    fn known_widths() {
        assert_eq!(Font::Regular.glyph_width(b' '), 278);
        assert_eq!(Font::Regular.glyph_width(b'W'), 944);
        assert_eq!(Font::Bold.glyph_width(b'b'), 611);
        assert_eq!(Font::Oblique.glyph_width(b'i'), 222);
        // "Ú" measures like "U".
        assert_eq!(Font::Regular.glyph_width(0xda), Font::Regular.glyph_width(b'U'));
    }

    #[test]
    fn text_width_scales_with_size() {
        let enc = encode("Ley").unwrap();
        let at_10 = Font::Regular.text_width(&enc, 10.0);
        let at_20 = Font::Regular.text_width(&enc, 20.0);
        assert!((at_20 - 2.0 * at_10).abs() < 1e-9);
        // L(556) + e(556) + y(500) = 1612 units -> 16.12pt at 10pt.
        assert!((at_10 - 16.12).abs() < 1e-9);
    }

    #[test]
    fn resource_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            Font::ALL.iter().map(|f| f.resource_name()).collect();
        assert_eq!(names.len(), 3);
    }
}
