//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{
    http::Method,
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{
    cell_cycle::{
        api_cell_cycle_by_gene, api_cell_cycle_by_stage, api_cell_cycle_gene_names,
        api_cell_cycle_genes,
    },
    drugs::{api_drug_by_name, api_drugs_all},
    gene_targets::{
        api_gene_targets_all, api_gene_targets_by_drug, api_gene_targets_by_gene,
        api_gene_targets_by_stage,
    },
    mirna::{
        api_mirna_all, api_mirna_by_gene, api_mirna_by_mirna, api_mirna_genes, api_mirna_names,
        api_mirna_search,
    },
    ppi::{api_ppi_all, api_ppi_by_gene, api_ppi_by_gene_and_score, api_ppi_by_score},
    reports::{api_hallmark_cell, api_kegg_pathway, api_mirna_wordcloud},
    sl::{api_sl_all, api_sl_by_gene, api_sl_nature_all, api_sl_nature_by_gene},
    system::health,
    tf::{api_tf_all, api_tf_by_factor, api_tf_by_gene, api_tf_by_target},
};
use crate::state::{AppState, SharedState};

/// Prefix shared by every dataset route.
pub const API_PREFIX: &str = "/cellcycledata";

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/health", get(health))
        .nest(API_PREFIX, api_routes())
        // Middleware
        .layer(cors_layer())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

fn api_routes() -> Router<SharedState> {
    Router::new()
        // Protein-protein interactions
        .route("/ppi/all",                          get(api_ppi_all))
        .route("/ppi/score/{min_score}",            get(api_ppi_by_score))
        .route("/ppi/gene/{gene}",                  get(api_ppi_by_gene))
        .route("/ppi/gene/{gene}/score/{min_score}", get(api_ppi_by_gene_and_score))

        // Transcription factors
        .route("/tf/all",                   get(api_tf_all))
        .route("/tf/factor/{tf}",           get(api_tf_by_factor))
        .route("/tf/target/{target_gene}",  get(api_tf_by_target))
        .route("/tf/gene/{gene}",           get(api_tf_by_gene))

        // miRNA-gene interactions
        .route("/mirna/all",            get(api_mirna_all))
        .route("/mirna/mirna/{mirna}",  get(api_mirna_by_mirna))
        .route("/mirna/gene/{gene}",    get(api_mirna_by_gene))
        .route("/mirna/mirnas",         get(api_mirna_names))
        .route("/mirna/genes",          get(api_mirna_genes))
        .route("/mirna/search/{name}",  get(api_mirna_search))

        // Synthetic lethality
        .route("/sl/all",                get(api_sl_all))
        .route("/sl/gene/{gene}",        get(api_sl_by_gene))
        .route("/sl/nature/all",         get(api_sl_nature_all))
        .route("/sl/nature/gene/{gene}", get(api_sl_nature_by_gene))

        // Drugs and targets
        .route("/drug-information",              get(api_drugs_all))
        .route("/drug-information/{drug}",       get(api_drug_by_name))
        .route("/gene-targets",                  get(api_gene_targets_all))
        .route("/gene-targets/gene/{gene}",      get(api_gene_targets_by_gene))
        .route("/gene-targets/stage/{stage}",    get(api_gene_targets_by_stage))
        .route("/gene-targets/drug/{drug}",      get(api_gene_targets_by_drug))

        // Cell-cycle genes
        .route("/allcellcyclegene",         get(api_cell_cycle_genes))
        .route("/allcellcyclegenename",     get(api_cell_cycle_gene_names))
        .route("/cellcycle/gene/{gene}",    get(api_cell_cycle_by_gene))
        .route("/cellcycle/stage/{stage}",  get(api_cell_cycle_by_stage))

        // Flat-file reports
        .route("/kegg-pathway",          get(api_kegg_pathway))
        .route("/hallmark-cell",         get(api_hallmark_cell))
        .route("/mirna-gene-wordcloud",  get(api_mirna_wordcloud))
}

/// Any origin, no credentials.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}
