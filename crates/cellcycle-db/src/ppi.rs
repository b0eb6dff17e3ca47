//! Protein-protein interaction repository.

use tracing::debug;

use crate::database::Database;
use crate::error::Result;
use crate::schema::PpiRecord;

const SELECT_PPI: &str = r#"
    SELECT node1, node2, node1_string_id, node2_string_id,
           neighborhood_on_chromosome, gene_fusion, phylogenetic_cooccurrence,
           homology, coexpression, experimentally_determined_interaction,
           database_annotated, automated_textmining, combined_score
    FROM ppi
"#;

#[derive(Clone)]
pub struct PpiRepository {
    db: Database,
}

impl PpiRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<PpiRecord>> {
        let rows = sqlx::query_as::<_, PpiRecord>(SELECT_PPI)
            .fetch_all(self.db.pool())
            .await?;
        debug!(rows = rows.len(), "fetched all PPI rows");
        Ok(rows)
    }

    /// Interactions with `combined_score >= min_score`.
    pub async fn by_min_score(&self, min_score: f64) -> Result<Vec<PpiRecord>> {
        let sql = format!("{SELECT_PPI} WHERE combined_score >= $1");
        let rows = sqlx::query_as::<_, PpiRecord>(&sql)
            .bind(min_score)
            .fetch_all(self.db.pool())
            .await?;
        Ok(rows)
    }

    /// Interactions where `gene` is either node.
    pub async fn by_gene(&self, gene: &str) -> Result<Vec<PpiRecord>> {
        let sql = format!("{SELECT_PPI} WHERE node1 = $1 OR node2 = $1");
        let rows = sqlx::query_as::<_, PpiRecord>(&sql)
            .bind(gene)
            .fetch_all(self.db.pool())
            .await?;
        Ok(rows)
    }

    pub async fn by_gene_and_min_score(&self, gene: &str, min_score: f64) -> Result<Vec<PpiRecord>> {
        let sql = format!("{SELECT_PPI} WHERE (node1 = $1 OR node2 = $1) AND combined_score >= $2");
        let rows = sqlx::query_as::<_, PpiRecord>(&sql)
            .bind(gene)
            .bind(min_score)
            .fetch_all(self.db.pool())
            .await?;
        Ok(rows)
    }
}
