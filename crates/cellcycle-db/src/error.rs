//! Database error types.

use cellcycle_common::ApiError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Could not connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Database(err.to_string())
    }
}
