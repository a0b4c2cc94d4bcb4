//! # pasc-pack — Legal Content Packs
//!
//! The fixed legal content every certificate draws on:
//!
//! - **Catalog** (`catalog.rs`): the Registry of Processing Activities for
//!   the shared state services (ClaveÚnica, FirmaGob, DocDigital).
//!
//! - **Clause** (`clause.rs`): one verbatim clause per contract type.
//!
//! - **Normative** (`normative.rs`): statute citations, the technical
//!   standard line, and the legal footer.
//!
//! ## Crate Policy
//!
//! - Depends only on `pasc-core` internally.
//! - All content is compiled in. Nothing is read from disk or network.

pub mod catalog;
pub mod clause;
pub mod normative;

pub use catalog::{Catalog, ServiceRecord};
pub use clause::ClauseTemplate;
pub use normative::NormativeReference;
