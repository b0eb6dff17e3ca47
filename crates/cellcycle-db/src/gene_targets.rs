//! Gene / drug target repository.

use tracing::debug;

use crate::database::Database;
use crate::error::Result;
use crate::schema::GeneTarget;

const SELECT_GENE_TARGET: &str = "SELECT gene, stage, drug, cancer, pmid FROM gene_target";

#[derive(Clone)]
pub struct GeneTargetRepository {
    db: Database,
}

impl GeneTargetRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<GeneTarget>> {
        let rows = sqlx::query_as::<_, GeneTarget>(SELECT_GENE_TARGET)
            .fetch_all(self.db.pool())
            .await?;
        debug!(rows = rows.len(), "fetched all gene targets");
        Ok(rows)
    }

    pub async fn by_gene(&self, gene: &str) -> Result<Vec<GeneTarget>> {
        self.filtered("gene = $1", gene).await
    }

    /// Targets whose gene acts in cell-cycle `stage`.
    pub async fn by_stage(&self, stage: &str) -> Result<Vec<GeneTarget>> {
        self.filtered("stage = $1", stage).await
    }

    pub async fn by_drug(&self, drug: &str) -> Result<Vec<GeneTarget>> {
        self.filtered("drug = $1", drug).await
    }

    async fn filtered(&self, predicate: &'static str, value: &str) -> Result<Vec<GeneTarget>> {
        let sql = format!("{SELECT_GENE_TARGET} WHERE {predicate}");
        let rows = sqlx::query_as::<_, GeneTarget>(&sql)
            .bind(value)
            .fetch_all(self.db.pool())
            .await?;
        Ok(rows)
    }
}
