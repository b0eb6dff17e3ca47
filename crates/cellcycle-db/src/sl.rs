//! Synthetic lethality repository.
//!
//! Two datasets: plain gene pairs (`sl`) and pairs annotated with
//! cell-cycle stage, GEMINI sensitivity and cell line (`sl_nature`).

use tracing::debug;

use crate::database::Database;
use crate::error::Result;
use crate::schema::{SlNatureRecord, SlPair};

const SELECT_SL: &str = r#"SELECT "geneA" AS gene_a, "geneB" AS gene_b FROM sl"#;

const SELECT_SL_NATURE: &str = r#"
    SELECT "Gene_A" AS gene_a,
           "stage_Gene_A" AS stage_gene_a,
           "Gene_B" AS gene_b,
           "stage_Gene_B" AS stage_gene_b,
           "GEMINI_sensitive" AS gemini_sensitive,
           "Cell_line" AS cell_line
    FROM sl_nature
"#;

#[derive(Clone)]
pub struct SlRepository {
    db: Database,
}

impl SlRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn all_pairs(&self) -> Result<Vec<SlPair>> {
        let rows = sqlx::query_as::<_, SlPair>(SELECT_SL)
            .fetch_all(self.db.pool())
            .await?;
        debug!(rows = rows.len(), "fetched all SL pairs");
        Ok(rows)
    }

    /// Pairs where `gene` is either partner.
    pub async fn pairs_by_gene(&self, gene: &str) -> Result<Vec<SlPair>> {
        let sql = format!(r#"{SELECT_SL} WHERE "geneA" = $1 OR "geneB" = $1"#);
        let rows = sqlx::query_as::<_, SlPair>(&sql)
            .bind(gene)
            .fetch_all(self.db.pool())
            .await?;
        Ok(rows)
    }

    pub async fn all_nature(&self) -> Result<Vec<SlNatureRecord>> {
        let rows = sqlx::query_as::<_, SlNatureRecord>(SELECT_SL_NATURE)
            .fetch_all(self.db.pool())
            .await?;
        debug!(rows = rows.len(), "fetched all SL nature rows");
        Ok(rows)
    }

    pub async fn nature_by_gene(&self, gene: &str) -> Result<Vec<SlNatureRecord>> {
        let sql = format!(r#"{SELECT_SL_NATURE} WHERE "Gene_A" = $1 OR "Gene_B" = $1"#);
        let rows = sqlx::query_as::<_, SlNatureRecord>(&sql)
            .bind(gene)
            .fetch_all(self.db.pool())
            .await?;
        Ok(rows)
    }
}
