//! Flat-file report endpoints.
//!
//! Pipelines read files synchronously, so they run on the blocking pool.
//! A failed read answers 500 with the report's diagnostic and no rows.

use axum::{extract::State, response::IntoResponse, Json};
use cellcycle_common::ApiError;
use cellcycle_reports::ReportFailure;

use crate::state::SharedState;

async fn run_report<T, F>(job: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ReportFailure> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}

/// GET /cellcycledata/kegg-pathway
pub async fn api_kegg_pathway(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let reports = state.reports.clone();
    let rows = run_report(move || reports.kegg_pathway()).await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/hallmark-cell
pub async fn api_hallmark_cell(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let reports = state.reports.clone();
    let summaries = run_report(move || reports.hallmark_cell()).await?;
    Ok(Json(summaries))
}

/// GET /cellcycledata/mirna-gene-wordcloud
pub async fn api_mirna_wordcloud(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let reports = state.reports.clone();
    let entries = run_report(move || reports.mirna_wordcloud()).await?;
    Ok(Json(entries))
}
