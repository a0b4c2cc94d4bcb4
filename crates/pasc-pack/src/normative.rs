//! # Normative References — Fixed Legal Text
//!
//! The statutes and resolutions every certificate cites, plus the legal
//! footer printed on every page set. None of this text is parameterized.

use serde::Serialize;

/// A statute or resolution in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormativeReference {
    /// Short label, e.g. "Ley Datos".
    pub label: &'static str,
    /// Full citation.
    pub citation: &'static str,
}

/// Personal data protection law.
pub const DATA_PROTECTION_LAW: NormativeReference = NormativeReference {
    label: "Ley Datos",
    citation: "Ley N° 21.719 (D.O. 13/12/2024)",
};

/// Technical standard cited in every certificate header.
pub const TECHNICAL_STANDARD: NormativeReference = NormativeReference {
    label: "Fuente Técnica",
    citation: "WikiGuías (Oficializada por Res. Ex. 250/2025 Sub. Hacienda)",
};

/// Digital transformation law and its regulation.
pub const DIGITAL_TRANSFORMATION_LAW: NormativeReference = NormativeReference {
    label: "Ley Transformación",
    citation: "Ley N° 21.180 y D.S. N° 4/2020",
};

/// All references in force, in citation order.
pub fn references_in_force() -> &'static [NormativeReference] {
    &[
        DATA_PROTECTION_LAW,
        TECHNICAL_STANDARD,
        DIGITAL_TRANSFORMATION_LAW,
    ]
}

/// Header line citing the technical standard.
pub fn standard_line() -> String {
    format!("Estándar Técnico: {}", TECHNICAL_STANDARD.citation)
}

/// Bold label above the legal footer.
pub const FOOTER_LABEL: &str = "VALIDACIÓN DE NORMATIVA:";

/// Legal footer, one line per sentence.
pub const FOOTER_TEXT: &str = "Documento generado conforme a la Resolución Exenta N° 250/2025 de la Subsecretaría de Hacienda,\n\
que oficializa la plataforma 'WikiGuías' como estándar técnico para la Ley N° 21.180.\n\
El uso de este formato acredita diligencia debida en el cumplimiento de la Ley N° 21.719.";

/// Label preceding the fingerprint on the last line of a certificate.
pub const TRACEABILITY_LABEL: &str = "ID TRAZABILIDAD PASC";

/// Attribution sentence closing every RAT certificate.
pub const RAT_ATTRIBUTION: &str =
    "Este registro ha sido precargado siguiendo los lineamientos de la Secretaría de Gobierno Digital.";

/// City where contract annexes are executed.
pub const EXECUTION_CITY: &str = "Santiago";
