//! Report error types.

use cellcycle_common::ApiError;
use thiserror::Error;

use crate::service::Report;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A pipeline failure tagged with the report and resource it came from.
#[derive(Debug, Error)]
#[error("{report} report failed reading {resource}: {source}")]
pub struct ReportFailure {
    pub report: Report,
    pub resource: String,
    #[source]
    pub source: ReportError,
}

impl From<ReportFailure> for ApiError {
    fn from(failure: ReportFailure) -> Self {
        ApiError::Report {
            message: failure.report.failure_message(),
            cause: failure.to_string(),
        }
    }
}
