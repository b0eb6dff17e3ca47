//! cellcycle-web — Read-only JSON API over the CellCycleDB datasets.
//!
//! Serves, under `/cellcycledata`:
//!   - Protein-protein, transcription factor and miRNA-gene interactions
//!   - Synthetic lethality pairs (plain and stage-annotated)
//!   - Drug information and gene/drug targets
//!   - Cell-cycle gene annotations
//!   - Flat-file reports: KEGG pathways, hallmark counts, miRNA word cloud

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
