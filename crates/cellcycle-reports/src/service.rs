//! The three reports, each bound to one fixed resource.

use std::fmt;
use std::io::Read;
use std::sync::Arc;

use tracing::debug;

use crate::error::{ReportError, ReportFailure, Result};
use crate::frequency::{extract_frequencies, FrequencyEntry};
use crate::hallmark::{aggregate_hallmarks, HallmarkSummary};
use crate::pathway::{pathway_rows, PathwayRow};
use crate::resource::ResourceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    KeggPathway,
    HallmarkCell,
    MirnaWordcloud,
}

impl Report {
    /// Diagnostic returned to clients when the report cannot be produced.
    pub fn failure_message(self) -> &'static str {
        match self {
            Report::KeggPathway => "Error reading KEGG pathway data",
            Report::HallmarkCell => "Error reading hallmark cell data",
            Report::MirnaWordcloud => "Error reading miRNA-gene wordcloud data",
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Report::KeggPathway => "KEGG pathway",
            Report::HallmarkCell => "hallmark cell",
            Report::MirnaWordcloud => "miRNA-gene wordcloud",
        };
        f.write_str(name)
    }
}

/// Resource names of the three reports, relative to the store root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub kegg_pathway: String,
    pub hallmark_cell: String,
    pub mirna_wordcloud: String,
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self {
            kegg_pathway: "Browser/KEGG_pathway.txt".to_string(),
            hallmark_cell: "home/hallmark_cell.txt".to_string(),
            mirna_wordcloud: "network/miRNA_gene_interaction_number.txt".to_string(),
        }
    }
}

impl ReportPaths {
    pub fn resource(&self, report: Report) -> &str {
        match report {
            Report::KeggPathway => &self.kegg_pathway,
            Report::HallmarkCell => &self.hallmark_cell,
            Report::MirnaWordcloud => &self.mirna_wordcloud,
        }
    }
}

/// Runs report pipelines against a resource store.
///
/// Every call opens its resource afresh and builds its result from scratch;
/// nothing is cached between calls.
#[derive(Clone)]
pub struct ReportService {
    store: Arc<dyn ResourceStore>,
    paths: ReportPaths,
}

impl ReportService {
    pub fn new(store: Arc<dyn ResourceStore>, paths: ReportPaths) -> Self {
        Self { store, paths }
    }

    pub fn kegg_pathway(&self) -> std::result::Result<Vec<PathwayRow>, ReportFailure> {
        self.run(Report::KeggPathway, pathway_rows)
    }

    pub fn hallmark_cell(&self) -> std::result::Result<Vec<HallmarkSummary>, ReportFailure> {
        self.run(Report::HallmarkCell, aggregate_hallmarks)
    }

    pub fn mirna_wordcloud(&self) -> std::result::Result<Vec<FrequencyEntry>, ReportFailure> {
        self.run(Report::MirnaWordcloud, extract_frequencies)
    }

    fn run<T, F>(&self, report: Report, pipeline: F) -> std::result::Result<Vec<T>, ReportFailure>
    where
        F: FnOnce(Box<dyn Read + Send>) -> Result<Vec<T>>,
    {
        let resource = self.paths.resource(report);
        let outcome = self
            .store
            .open(resource)
            .map_err(ReportError::from)
            .and_then(pipeline);

        match outcome {
            Ok(rows) => {
                debug!(%report, resource, rows = rows.len(), "report built");
                Ok(rows)
            }
            Err(source) => Err(ReportFailure {
                report,
                resource: resource.to_string(),
                source,
            }),
        }
    }
}
