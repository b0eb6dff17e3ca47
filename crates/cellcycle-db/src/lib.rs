//! CellCycleDB Database Layer
//!
//! Read-only access to the curated interaction datasets stored in
//! PostgreSQL. Each dataset has one repository; every operation issues a
//! single fixed, parameterized statement and returns typed rows.
//!
//! | Repository | Table |
//! |------------|-------|
//! | [`PpiRepository`] | `ppi` |
//! | [`TfRepository`] | `tf` |
//! | [`MirnaGeneRepository`] | `mirna_gene` |
//! | [`SlRepository`] | `sl`, `sl_nature` |
//! | [`DrugInformationRepository`] | `drug_information` |
//! | [`GeneTargetRepository`] | `gene_target` |
//! | [`CellCycleGeneRepository`] | `cellcyclegenedata` |
//!
//! The expected table layout is documented in `sql/schema.sql`.
//!
//! # Example
//!
//! ```rust,no_run
//! use cellcycle_db::{Database, PpiRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://cellcycle@localhost/cellcycle", 10, 2).await?;
//!     let partners = PpiRepository::new(db).by_gene_and_min_score("CDK1", 0.9).await?;
//!     println!("{} high-confidence partners", partners.len());
//!     Ok(())
//! }
//! ```

pub mod cell_cycle;
pub mod database;
pub mod drugs;
pub mod error;
pub mod gene_targets;
pub mod mirna;
pub mod ppi;
pub mod schema;
pub mod sl;
pub mod tf;

pub use cell_cycle::CellCycleGeneRepository;
pub use database::Database;
pub use drugs::DrugInformationRepository;
pub use error::{DbError, Result};
pub use gene_targets::GeneTargetRepository;
pub use mirna::MirnaGeneRepository;
pub use ppi::PpiRepository;
pub use schema::{
    CellCycleGene, DrugInformation, GeneTarget, MirnaGeneRecord, PpiRecord, SlNatureRecord,
    SlPair, TfRecord,
};
pub use sl::SlRepository;
pub use tf::TfRepository;
