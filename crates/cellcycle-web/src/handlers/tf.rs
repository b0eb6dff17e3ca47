//! Transcription factor interaction endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use cellcycle_common::ApiError;
use cellcycle_db::TfRepository;

use crate::state::SharedState;

/// GET /cellcycledata/tf/all
pub async fn api_tf_all(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = TfRepository::new(state.db.clone()).all().await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/tf/factor/{tf}
pub async fn api_tf_by_factor(
    State(state): State<SharedState>,
    Path(tf): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = TfRepository::new(state.db.clone()).by_factor(&tf).await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/tf/target/{target_gene}
pub async fn api_tf_by_target(
    State(state): State<SharedState>,
    Path(target_gene): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = TfRepository::new(state.db.clone()).by_target(&target_gene).await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/tf/gene/{gene}
pub async fn api_tf_by_gene(
    State(state): State<SharedState>,
    Path(gene): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = TfRepository::new(state.db.clone()).by_gene(&gene).await?;
    Ok(Json(rows))
}
