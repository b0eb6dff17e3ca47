//! Connection pool management.

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::error::{DbError, Result};

/// Main database handle. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect eagerly, failing if the server cannot be reached.
    pub async fn connect(url: &str, max_connections: u32, min_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .connect(url)
            .await
            .map_err(DbError::Connect)?;
        info!(max_connections, min_connections, "database pool ready");
        Ok(Self { pool })
    }

    /// Build a pool that opens connections on first use.
    pub fn connect_lazy(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy(url)
            .map_err(DbError::Connect)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
