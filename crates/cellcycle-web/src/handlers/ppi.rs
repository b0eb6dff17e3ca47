//! Protein-protein interaction endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use cellcycle_common::ApiError;
use cellcycle_db::PpiRepository;

use crate::state::SharedState;

/// GET /cellcycledata/ppi/all
pub async fn api_ppi_all(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = PpiRepository::new(state.db.clone()).all().await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/ppi/score/{min_score}
pub async fn api_ppi_by_score(
    State(state): State<SharedState>,
    Path(min_score): Path<f64>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = PpiRepository::new(state.db.clone()).by_min_score(min_score).await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/ppi/gene/{gene}
pub async fn api_ppi_by_gene(
    State(state): State<SharedState>,
    Path(gene): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = PpiRepository::new(state.db.clone()).by_gene(&gene).await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/ppi/gene/{gene}/score/{min_score}
pub async fn api_ppi_by_gene_and_score(
    State(state): State<SharedState>,
    Path((gene, min_score)): Path<(String, f64)>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = PpiRepository::new(state.db.clone())
        .by_gene_and_min_score(&gene, min_score)
        .await?;
    Ok(Json(rows))
}
