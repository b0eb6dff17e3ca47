//! Row types for every dataset.
//!
//! SQL statements alias source columns to the Rust field names; serde
//! renames restore the JSON names clients expect.

use serde::Serialize;
use sqlx::FromRow;

/// Protein-protein interaction with STRING evidence channel scores.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PpiRecord {
    pub node1: Option<String>,
    pub node2: Option<String>,
    pub node1_string_id: Option<String>,
    pub node2_string_id: Option<String>,
    pub neighborhood_on_chromosome: Option<i32>,
    pub gene_fusion: Option<f64>,
    pub phylogenetic_cooccurrence: Option<f64>,
    pub homology: Option<f64>,
    pub coexpression: Option<f64>,
    pub experimentally_determined_interaction: Option<f64>,
    pub database_annotated: Option<f64>,
    pub automated_textmining: Option<f64>,
    pub combined_score: Option<f64>,
}

/// Transcription factor → target gene regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct TfRecord {
    pub tf: Option<String>,
    pub target_gene: Option<String>,
    pub interaction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct MirnaGeneRecord {
    #[serde(rename = "miRNA")]
    pub mirna: Option<String>,
    pub gene: Option<String>,
}

/// Synthetic-lethal gene pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SlPair {
    pub gene_a: Option<String>,
    pub gene_b: Option<String>,
}

/// Synthetic-lethal pair with per-gene cell-cycle stage, GEMINI
/// sensitivity and the screened cell line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SlNatureRecord {
    pub gene_a: Option<String>,
    pub stage_gene_a: Option<String>,
    pub gene_b: Option<String>,
    pub stage_gene_b: Option<String>,
    pub gemini_sensitive: Option<String>,
    pub cell_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct DrugInformation {
    pub drug: Option<String>,
    pub target: Option<String>,
    pub drug_type: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}

/// Drug targeting a cell-cycle gene in a given cancer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct GeneTarget {
    pub gene: Option<String>,
    pub stage: Option<String>,
    pub drug: Option<String>,
    pub cancer: Option<String>,
    pub pmid: Option<String>,
}

/// Curated cell-cycle gene annotation.
///
/// JSON keys keep the source column names with the leading capital run
/// lowercased (`Gene_Symbol` → `gene_Symbol`, `PMID` → `pmid`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct CellCycleGene {
    #[serde(rename = "gene_Symbol")]
    pub gene_symbol: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub species: Option<String>,
    #[serde(rename = "gene_ID")]
    pub gene_id: Option<String>,
    #[serde(rename = "related_Gene_Symbol")]
    pub related_gene_symbol: Option<String>,
    #[serde(rename = "uniProt_ID")]
    pub uniprot_id: Option<String>,
    #[serde(rename = "article_Title")]
    pub article_title: Option<String>,
    pub pmid: Option<String>,
    #[serde(rename = "year_of_Publication")]
    pub year_of_publication: Option<String>,
    pub method: Option<String>,
    pub stage: Option<String>,
}
