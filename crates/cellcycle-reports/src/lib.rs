//! cellcycle-reports — Flat-file reporting pipelines.
//!
//! Three reports are computed from static tab-delimited resources on every
//! request, with no shared state between requests:
//!
//! | Report | Resource | Pipeline |
//! |--------|----------|----------|
//! | KEGG pathway listing | `Browser/KEGG_pathway.txt` | [`pathway::pathway_rows`] |
//! | Hallmark / gene co-occurrence | `home/hallmark_cell.txt` | [`hallmark::aggregate_hallmarks`] |
//! | miRNA word cloud | `network/miRNA_gene_interaction_number.txt` | [`frequency::extract_frequencies`] |
//!
//! All three share the line-oriented [`table`] parser. Resources are reached
//! through a [`ResourceStore`], so the pipelines never touch the database.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cellcycle_reports::{DirResources, ReportPaths, ReportService};
//!
//! let service = ReportService::new(Arc::new(DirResources::new("static")), ReportPaths::default());
//! for summary in service.hallmark_cell()? {
//!     println!("{}: {} rows", summary.gene, summary.count);
//! }
//! # Ok::<(), cellcycle_reports::ReportFailure>(())
//! ```

pub mod error;
pub mod frequency;
pub mod hallmark;
pub mod pathway;
pub mod resource;
pub mod service;
pub mod table;

pub use error::{ReportError, ReportFailure, Result};
pub use frequency::{extract_frequencies, FrequencyEntry};
pub use hallmark::{aggregate_hallmarks, HallmarkAggregator, HallmarkSummary};
pub use pathway::{pathway_rows, PathwayRow};
pub use resource::{DirResources, MemoryResources, ResourceStore};
pub use service::{Report, ReportPaths, ReportService};
pub use table::{Table, TableReader, TableRow};
