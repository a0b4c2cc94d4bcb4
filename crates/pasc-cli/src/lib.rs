//! # pasc-cli — PASC Data Guardian Command-Line Interface
//!
//! Collects the fields a certificate needs and hands them to `pasc-cert`.
//!
//! ## Subcommands
//!
//! - `rat` — RAT certificate for a catalog service
//! - `contract` — legal annex for a contracting party
//! - `catalog` — list services or show one service's legal card
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers delegate to the library crates; no document text is built here.
//! - Handlers return an exit code; `main` reports errors.

pub mod catalog;
pub mod contract;
pub mod output;
pub mod rat;
