//! HTTP handlers for all API routes.

pub mod cell_cycle;
pub mod drugs;
pub mod gene_targets;
pub mod mirna;
pub mod ppi;
pub mod reports;
pub mod sl;
pub mod system;
pub mod tf;
