//! # RAT Catalog — Shared State Services
//!
//! The Registry of Processing Activities (RAT) for the shared services run
//! by the Secretaría de Gobierno Digital. Each service name maps to exactly
//! one [`ServiceRecord`].
//!
//! ## Initialization
//!
//! The catalog is built from the hardcoded entries below the first time
//! [`Catalog::global()`] is called and lives for the rest of the process.
//! It is never mutated, so concurrent readers need no locking.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use pasc_core::{PascError, RiskAssessment, RiskLevel, Role};

/// A catalog entry describing how one service processes personal data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Unique service name (catalog key).
    pub service: String,
    /// Legal role of the service.
    pub role: Role,
    /// Personal-data fields handled.
    pub data_categories: String,
    /// Purpose of the processing.
    pub purpose: String,
    /// Legal basis (statute citation).
    pub legal_basis: String,
    /// Risk classification.
    pub risk: RiskAssessment,
}

/// The immutable RAT catalog, in presentation order.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ServiceRecord>,
}

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The process-wide catalog, built on first access.
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(Catalog::builtin)
    }

    /// Build a fresh copy of the built-in catalog.
    pub fn builtin() -> Self {
        Self {
            records: builtin_records(),
        }
    }

    /// Look up a service by its exact name.
    ///
    /// # Errors
    ///
    /// Returns `PascError::UnknownService` if the name is not a catalog key.
    pub fn lookup(&self, service: &str) -> Result<&ServiceRecord, PascError> {
        self.get(service)
            .ok_or_else(|| PascError::UnknownService(service.to_string()))
    }

    /// Look up a service, returning `None` when absent.
    pub fn get(&self, service: &str) -> Option<&ServiceRecord> {
        self.records.iter().find(|r| r.service == service)
    }

    /// Service names in presentation order.
    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.service.as_str())
    }

    /// All records in presentation order.
    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Look up a service in the global catalog.
pub fn lookup(service: &str) -> Result<&'static ServiceRecord, PascError> {
    Catalog::global().lookup(service)
}

fn builtin_records() -> Vec<ServiceRecord> {
    vec![
        ServiceRecord {
            service: "ClaveÚnica".to_string(),
            role: Role::Responsible,
            data_categories: "RUN, Nombre, IP, Metadatos".to_string(),
            purpose: "Autenticación y Ciberseguridad".to_string(),
            legal_basis: "Ley N° 21.658 y Ley N° 19.880".to_string(),
            risk: RiskAssessment::qualified(RiskLevel::High, "Infraestructura Crítica"),
        },
        ServiceRecord {
            service: "FirmaGob".to_string(),
            role: Role::Responsible,
            data_categories: "RUN, Correo, Firma Electrónica".to_string(),
            purpose: "Gestión de Certificados Digitales".to_string(),
            legal_basis: "Ley N° 19.799".to_string(),
            risk: RiskAssessment::new(RiskLevel::High),
        },
        ServiceRecord {
            service: "DocDigital".to_string(),
            role: Role::Processor,
            data_categories: "Comunicaciones oficiales".to_string(),
            purpose: "Tramitación Estado".to_string(),
            legal_basis: "D.S. N° 4 Transformación Digital".to_string(),
            risk: RiskAssessment::new(RiskLevel::Medium),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_three_services_in_order() {
        let names: Vec<&str> = Catalog::global().service_names().collect();
        assert_eq!(names, ["ClaveÚnica", "FirmaGob", "DocDigital"]);
        assert_eq!(Catalog::global().len(), 3);
        assert!(!Catalog::global().is_empty());
    }

    #[test]
    fn every_record_is_complete() {
        for record in Catalog::global().records() {
            assert!(!record.role.label().is_empty());
            assert!(!record.data_categories.trim().is_empty(), "{}", record.service);
            assert!(!record.purpose.trim().is_empty(), "{}", record.service);
            assert!(!record.legal_basis.trim().is_empty(), "{}", record.service);
            assert!(!record.risk.to_string().is_empty(), "{}", record.service);
        }
    }

    #[test]
    fn service_names_are_unique() {
        let names: HashSet<&str> = Catalog::global().service_names().collect();
        assert_eq!(names.len(), Catalog::global().len());
    }

    #[test]
    fn lookup_clave_unica() {
        let r = lookup("ClaveÚnica").unwrap();
        assert_eq!(r.role, Role::Responsible);
        assert_eq!(r.data_categories, "RUN, Nombre, IP, Metadatos");
        assert_eq!(r.legal_basis, "Ley N° 21.658 y Ley N° 19.880");
        assert_eq!(r.risk.to_string(), "ALTO (Infraestructura Crítica)");
    }

    #[test]
    fn lookup_doc_digital_is_processor() {
        let r = lookup("DocDigital").unwrap();
        assert_eq!(r.role.label(), "Encargado");
        assert_eq!(r.risk.level, RiskLevel::Medium);
    }

    #[test]
    fn lookup_unknown_fails() {
        assert!(matches!(lookup("Registro Civil"), Err(PascError::UnknownService(_))));
        // Keys are exact: no case folding, no accent folding.
        assert!(lookup("claveúnica").is_err());
        assert!(lookup("ClaveUnica").is_err());
    }

    #[test]
    fn record_serializes_with_stable_keys() {
        let v = serde_json::to_value(lookup("FirmaGob").unwrap()).unwrap();
        assert_eq!(v["role"], "responsible");
        assert_eq!(v["risk"]["level"], "high");
        assert!(v["risk"].get("qualifier").is_none());
    }

    #[test]
    fn global_is_a_single_instance() {
        assert!(std::ptr::eq(Catalog::global(), Catalog::global()));
    }

    #[test]
    fn concurrent_reads_agree() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| lookup("FirmaGob").map(|r| r.legal_basis.clone())))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap().unwrap(), "Ley N° 19.799");
        }
    }
}
