//! # Clause Library — Contract Clauses by Type
//!
//! One fixed clause per [`ContractType`], taken from the official contract
//! formats (public procurement annex, fee-based services agreement). Clauses
//! are inserted verbatim; they carry no placeholders.

use serde::Serialize;

use pasc_core::{ContractType, PascError};

/// Clause nine of the official public procurement format.
pub const PROCUREMENT_CLAUSE: &str = "NOVENO: INCUMPLIMIENTO DEL ENCARGO Y RESPONSABILIDADES. \
Si el ENCARGADO trata los datos con un objeto distinto del encargo convenido o los cede o \
entrega sin haber sido autorizado... se le considerará como responsable de datos para todos \
los efectos legales, debiendo responder personalmente por las infracciones en que incurra y \
solidariamente con el RESPONSABLE... (Fuente: Cláusula Novena, Formato Oficial Compras Públicas).";

/// Data-protection clause of the fee-based services format.
pub const FEES_CLAUSE: &str = "La Consultora se obliga a observar las disposiciones de la \
Ley N° 19.628... quedando prohibido su uso para fines distintos a los propios del cumplimiento \
del presente convenio... Deberá sujetarse a las reglas, protocolos y procedimientos internos \
que [INSTITUCIÓN] establezca. (Fuente: Formato Tipo Honorarios Ajustado Ley 21.719).";

/// The clause bound to a contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClauseTemplate {
    pub contract_type: ContractType,
    pub text: &'static str,
}

/// The clause for a contract type.
pub fn lookup(contract_type: ContractType) -> ClauseTemplate {
    let text = match contract_type {
        ContractType::Procurement => PROCUREMENT_CLAUSE,
        ContractType::Fees => FEES_CLAUSE,
    };
    ClauseTemplate {
        contract_type,
        text,
    }
}

/// Resolve a user-facing label and return its clause.
///
/// # Errors
///
/// Returns `PascError::UnknownContractType` for labels outside the label table.
pub fn for_label(label: &str) -> Result<ClauseTemplate, PascError> {
    ContractType::from_label(label).map(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn procurement_clause_text() {
        let c = lookup(ContractType::Procurement);
        assert!(c.text.starts_with("NOVENO: INCUMPLIMIENTO"));
        assert!(c.text.ends_with("Formato Oficial Compras Públicas)."));
        assert_eq!(c.text, PROCUREMENT_CLAUSE);
    }

    #[test]
    fn fees_clause_text() {
        let c = lookup(ContractType::Fees);
        assert!(c.text.starts_with("La Consultora se obliga"));
        assert!(c.text.contains("[INSTITUCIÓN]"));
        assert_eq!(c.text, FEES_CLAUSE);
    }

    #[test]
    fn line_continuations_keep_single_spaces() {
        for ty in ContractType::all() {
            let text = lookup(*ty).text;
            assert!(!text.contains("  "), "{ty:?} has a double space");
            assert!(!text.contains('\n'));
        }
    }

    #[test]
    fn one_distinct_clause_per_type() {
        assert_ne!(
            lookup(ContractType::Procurement).text,
            lookup(ContractType::Fees).text
        );
    }

    #[test]
    fn for_label_dispatch() {
        assert_eq!(
            for_label("Compras Públicas (Anexo X)").unwrap().text,
            PROCUREMENT_CLAUSE
        );
        assert_eq!(for_label("Honorarios").unwrap().text, FEES_CLAUSE);
        assert!(for_label("Arriendo").is_err());
    }
}
