//! Cell-cycle gene annotation endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use cellcycle_common::ApiError;
use cellcycle_db::CellCycleGeneRepository;

use crate::state::SharedState;

/// GET /cellcycledata/allcellcyclegene
pub async fn api_cell_cycle_genes(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = CellCycleGeneRepository::new(state.db.clone()).all().await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/allcellcyclegenename — one symbol per annotation row
pub async fn api_cell_cycle_gene_names(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let symbols = CellCycleGeneRepository::new(state.db.clone()).gene_symbols().await?;
    Ok(Json(symbols))
}

/// GET /cellcycledata/cellcycle/gene/{gene}
pub async fn api_cell_cycle_by_gene(
    State(state): State<SharedState>,
    Path(gene): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = CellCycleGeneRepository::new(state.db.clone()).by_gene(&gene).await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/cellcycle/stage/{stage}
pub async fn api_cell_cycle_by_stage(
    State(state): State<SharedState>,
    Path(stage): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = CellCycleGeneRepository::new(state.db.clone()).by_stage(&stage).await?;
    Ok(Json(rows))
}
