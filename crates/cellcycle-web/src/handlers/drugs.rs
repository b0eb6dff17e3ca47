//! Drug information endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use cellcycle_common::ApiError;
use cellcycle_db::DrugInformationRepository;

use crate::state::SharedState;

/// GET /cellcycledata/drug-information
pub async fn api_drugs_all(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = DrugInformationRepository::new(state.db.clone()).all().await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/drug-information/{drug}
///
/// Unknown drugs answer 200 with a `null` body.
pub async fn api_drug_by_name(
    State(state): State<SharedState>,
    Path(drug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let record = DrugInformationRepository::new(state.db.clone()).by_drug(&drug).await?;
    Ok(Json(record))
}
