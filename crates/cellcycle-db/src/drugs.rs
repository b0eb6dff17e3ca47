//! Drug information repository.

use tracing::debug;

use crate::database::Database;
use crate::error::Result;
use crate::schema::DrugInformation;

const SELECT_DRUG_INFORMATION: &str =
    "SELECT drug, target, drug_type, status, description FROM drug_information";

#[derive(Clone)]
pub struct DrugInformationRepository {
    db: Database,
}

impl DrugInformationRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<DrugInformation>> {
        let rows = sqlx::query_as::<_, DrugInformation>(SELECT_DRUG_INFORMATION)
            .fetch_all(self.db.pool())
            .await?;
        debug!(rows = rows.len(), "fetched all drug information rows");
        Ok(rows)
    }

    /// The record for `drug`. If several rows share the name, the first
    /// one returned by the server wins.
    pub async fn by_drug(&self, drug: &str) -> Result<Option<DrugInformation>> {
        let sql = format!("{SELECT_DRUG_INFORMATION} WHERE drug = $1 LIMIT 1");
        let row = sqlx::query_as::<_, DrugInformation>(&sql)
            .bind(drug)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row)
    }
}
