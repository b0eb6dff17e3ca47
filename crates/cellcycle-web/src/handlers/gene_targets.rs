//! Gene / drug target endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use cellcycle_common::ApiError;
use cellcycle_db::GeneTargetRepository;

use crate::state::SharedState;

/// GET /cellcycledata/gene-targets
pub async fn api_gene_targets_all(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = GeneTargetRepository::new(state.db.clone()).all().await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/gene-targets/gene/{gene}
pub async fn api_gene_targets_by_gene(
    State(state): State<SharedState>,
    Path(gene): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = GeneTargetRepository::new(state.db.clone()).by_gene(&gene).await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/gene-targets/stage/{stage}
pub async fn api_gene_targets_by_stage(
    State(state): State<SharedState>,
    Path(stage): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = GeneTargetRepository::new(state.db.clone()).by_stage(&stage).await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/gene-targets/drug/{drug}
pub async fn api_gene_targets_by_drug(
    State(state): State<SharedState>,
    Path(drug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = GeneTargetRepository::new(state.db.clone()).by_drug(&drug).await?;
    Ok(Json(rows))
}
