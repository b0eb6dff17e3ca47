//! Cell-cycle gene annotation repository.

use tracing::debug;

use crate::database::Database;
use crate::error::Result;
use crate::schema::CellCycleGene;

const SELECT_CELL_CYCLE_GENE: &str = r#"
    SELECT "Gene_Symbol" AS gene_symbol,
           "Description" AS description,
           "Category" AS category,
           "Species" AS species,
           "Gene_ID" AS gene_id,
           "Related_Gene_Symbol" AS related_gene_symbol,
           "UniProt_ID" AS uniprot_id,
           "Article_Title" AS article_title,
           "PMID" AS pmid,
           "Year_of_Publication" AS year_of_publication,
           "Method" AS method,
           stage
    FROM cellcyclegenedata
"#;

#[derive(Clone)]
pub struct CellCycleGeneRepository {
    db: Database,
}

impl CellCycleGeneRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<CellCycleGene>> {
        let rows = sqlx::query_as::<_, CellCycleGene>(SELECT_CELL_CYCLE_GENE)
            .fetch_all(self.db.pool())
            .await?;
        debug!(rows = rows.len(), "fetched all cell-cycle genes");
        Ok(rows)
    }

    /// The symbol of every annotation row, one entry per row.
    /// Genes annotated more than once appear more than once.
    pub async fn gene_symbols(&self) -> Result<Vec<Option<String>>> {
        let symbols = sqlx::query_scalar::<_, Option<String>>(
            r#"SELECT "Gene_Symbol" FROM cellcyclegenedata"#,
        )
        .fetch_all(self.db.pool())
        .await?;
        Ok(symbols)
    }

    pub async fn by_gene(&self, gene: &str) -> Result<Vec<CellCycleGene>> {
        self.filtered(r#""Gene_Symbol" = $1"#, gene).await
    }

    pub async fn by_stage(&self, stage: &str) -> Result<Vec<CellCycleGene>> {
        self.filtered("stage = $1", stage).await
    }

    async fn filtered(&self, predicate: &'static str, value: &str) -> Result<Vec<CellCycleGene>> {
        let sql = format!("{SELECT_CELL_CYCLE_GENE} WHERE {predicate}");
        let rows = sqlx::query_as::<_, CellCycleGene>(&sql)
            .bind(value)
            .fetch_all(self.db.pool())
            .await?;
        Ok(rows)
    }
}
