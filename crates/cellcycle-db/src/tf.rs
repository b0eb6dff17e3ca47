//! Transcription factor interaction repository.

use tracing::debug;

use crate::database::Database;
use crate::error::Result;
use crate::schema::TfRecord;

const SELECT_TF: &str = "SELECT tf, target_gene, interaction FROM tf";

#[derive(Clone)]
pub struct TfRepository {
    db: Database,
}

impl TfRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<TfRecord>> {
        let rows = sqlx::query_as::<_, TfRecord>(SELECT_TF)
            .fetch_all(self.db.pool())
            .await?;
        debug!(rows = rows.len(), "fetched all TF rows");
        Ok(rows)
    }

    /// Interactions regulated by factor `tf`.
    pub async fn by_factor(&self, tf: &str) -> Result<Vec<TfRecord>> {
        self.filtered("tf = $1", tf).await
    }

    pub async fn by_target(&self, target_gene: &str) -> Result<Vec<TfRecord>> {
        self.filtered("target_gene = $1", target_gene).await
    }

    /// Interactions where `gene` is the factor or the target.
    pub async fn by_gene(&self, gene: &str) -> Result<Vec<TfRecord>> {
        self.filtered("tf = $1 OR target_gene = $1", gene).await
    }

    async fn filtered(&self, predicate: &'static str, value: &str) -> Result<Vec<TfRecord>> {
        let sql = format!("{SELECT_TF} WHERE {predicate}");
        let rows = sqlx::query_as::<_, TfRecord>(&sql)
            .bind(value)
            .fetch_all(self.db.pool())
            .await?;
        Ok(rows)
    }
}
