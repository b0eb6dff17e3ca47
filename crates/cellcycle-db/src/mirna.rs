//! miRNA-gene interaction repository.

use tracing::debug;

use crate::database::Database;
use crate::error::Result;
use crate::schema::MirnaGeneRecord;

const SELECT_MIRNA_GENE: &str = r#"SELECT "miRNA" AS mirna, gene FROM mirna_gene"#;

#[derive(Clone)]
pub struct MirnaGeneRepository {
    db: Database,
}

impl MirnaGeneRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<MirnaGeneRecord>> {
        let rows = sqlx::query_as::<_, MirnaGeneRecord>(SELECT_MIRNA_GENE)
            .fetch_all(self.db.pool())
            .await?;
        debug!(rows = rows.len(), "fetched all miRNA-gene rows");
        Ok(rows)
    }

    pub async fn by_mirna(&self, mirna: &str) -> Result<Vec<MirnaGeneRecord>> {
        self.filtered(r#""miRNA" = $1"#, mirna).await
    }

    pub async fn by_gene(&self, gene: &str) -> Result<Vec<MirnaGeneRecord>> {
        self.filtered("gene = $1", gene).await
    }

    /// Rows where `name` matches either the miRNA or the gene.
    pub async fn by_mirna_or_gene(&self, name: &str) -> Result<Vec<MirnaGeneRecord>> {
        self.filtered(r#""miRNA" = $1 OR gene = $1"#, name).await
    }

    /// Every distinct miRNA name, sorted.
    pub async fn distinct_mirnas(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"SELECT DISTINCT "miRNA" FROM mirna_gene WHERE "miRNA" IS NOT NULL ORDER BY "miRNA""#,
        )
        .fetch_all(self.db.pool())
        .await?;
        Ok(names)
    }

    /// Every distinct gene symbol, sorted.
    pub async fn distinct_genes(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT gene FROM mirna_gene WHERE gene IS NOT NULL ORDER BY gene",
        )
        .fetch_all(self.db.pool())
        .await?;
        Ok(names)
    }

    async fn filtered(&self, predicate: &'static str, value: &str) -> Result<Vec<MirnaGeneRecord>> {
        let sql = format!("{SELECT_MIRNA_GENE} WHERE {predicate}");
        let rows = sqlx::query_as::<_, MirnaGeneRecord>(&sql)
            .bind(value)
            .fetch_all(self.db.pool())
            .await?;
        Ok(rows)
    }
}
