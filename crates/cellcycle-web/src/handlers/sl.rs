//! Synthetic lethality endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use cellcycle_common::ApiError;
use cellcycle_db::SlRepository;

use crate::state::SharedState;

/// GET /cellcycledata/sl/all
pub async fn api_sl_all(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = SlRepository::new(state.db.clone()).all_pairs().await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/sl/gene/{gene}
pub async fn api_sl_by_gene(
    State(state): State<SharedState>,
    Path(gene): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = SlRepository::new(state.db.clone()).pairs_by_gene(&gene).await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/sl/nature/all
pub async fn api_sl_nature_all(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = SlRepository::new(state.db.clone()).all_nature().await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/sl/nature/gene/{gene}
pub async fn api_sl_nature_by_gene(
    State(state): State<SharedState>,
    Path(gene): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = SlRepository::new(state.db.clone()).nature_by_gene(&gene).await?;
    Ok(Json(rows))
}
