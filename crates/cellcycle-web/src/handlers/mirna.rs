//! miRNA-gene interaction endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use cellcycle_common::ApiError;
use cellcycle_db::MirnaGeneRepository;

use crate::state::SharedState;

/// GET /cellcycledata/mirna/all
pub async fn api_mirna_all(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = MirnaGeneRepository::new(state.db.clone()).all().await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/mirna/mirna/{mirna}
pub async fn api_mirna_by_mirna(
    State(state): State<SharedState>,
    Path(mirna): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = MirnaGeneRepository::new(state.db.clone()).by_mirna(&mirna).await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/mirna/gene/{gene}
pub async fn api_mirna_by_gene(
    State(state): State<SharedState>,
    Path(gene): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = MirnaGeneRepository::new(state.db.clone()).by_gene(&gene).await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/mirna/search/{name} — matches miRNA or gene
pub async fn api_mirna_search(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = MirnaGeneRepository::new(state.db.clone())
        .by_mirna_or_gene(&name)
        .await?;
    Ok(Json(rows))
}

/// GET /cellcycledata/mirna/mirnas
pub async fn api_mirna_names(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let names = MirnaGeneRepository::new(state.db.clone()).distinct_mirnas().await?;
    Ok(Json(names))
}

/// GET /cellcycledata/mirna/genes
pub async fn api_mirna_genes(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let genes = MirnaGeneRepository::new(state.db.clone()).distinct_genes().await?;
    Ok(Json(genes))
}
