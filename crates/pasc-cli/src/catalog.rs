//! # Catalog — inspect the RAT catalog.
//!
//! ```bash
//! pasc catalog list
//! pasc catalog show ClaveÚnica
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};

use pasc_pack::{normative, Catalog, ServiceRecord};

/// Arguments for `pasc catalog`.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Available catalog subcommands.
#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// List catalog services and the regulations in force.
    List,

    /// Show the legal card of one service.
    Show {
        /// Catalog service name (exact).
        service: String,
    },
}

/// Execute `pasc catalog`.
pub fn run_catalog(args: &CatalogArgs) -> Result<u8> {
    match &args.command {
        CatalogCommand::List => {
            print!("{}", render_list(Catalog::global()));
            Ok(0)
        }
        CatalogCommand::Show { service } => {
            let record = Catalog::global().lookup(service)?;
            print!("{}", render_card(record));
            Ok(0)
        }
    }
}

fn render_list(catalog: &Catalog) -> String {
    let mut out = String::from("Servicios del Estado:\n");
    for record in catalog.records() {
        out.push_str(&format!(
            "  {:<12} {:<12} {}\n",
            record.service,
            record.role.label(),
            record.risk
        ));
    }
    out.push_str("\nNormativa vigente:\n");
    for reference in normative::references_in_force() {
        out.push_str(&format!("  {}: {}\n", reference.label, reference.citation));
    }
    out
}

/// The legal card shown before downloading a RAT certificate.
fn render_card(record: &ServiceRecord) -> String {
    format!(
        "{}\n\
         Rol: {} | Riesgo: {}\n\
         Base Legal: {}\n\
         Datos: {}\n\
         Finalidad: {}\n",
        record.service,
        record.role,
        record.risk,
        record.legal_basis,
        record.data_categories,
        record.purpose,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_names_every_service() {
        let out = render_list(Catalog::global());
        for name in Catalog::global().service_names() {
            assert!(out.contains(name), "{name}");
        }
        assert!(out.contains("Ley N° 21.719"));
    }

    #[test]
    fn card_for_clave_unica() {
        let record = Catalog::global().lookup("ClaveÚnica").unwrap();
        let card = render_card(record);
        assert!(card.contains("Rol: Responsable | Riesgo: ALTO (Infraestructura Crítica)"));
        assert!(card.contains("Base Legal: Ley N° 21.658 y Ley N° 19.880"));
        assert!(card.contains("Datos: RUN, Nombre, IP, Metadatos"));
    }

    #[test]
    fn show_unknown_service_fails() {
        let args = CatalogArgs {
            command: CatalogCommand::Show {
                service: "Unknown".to_string(),
            },
        };
        assert!(run_catalog(&args).is_err());
    }
}
