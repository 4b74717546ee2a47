//! The shared database client: one pool per process, reached through a
//! cheap-to-clone handle.

use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared-ownership handle over the process's single PostgreSQL pool.
///
/// Construct exactly one `Db` at startup and pass clones through
/// [`crate::state::AppState`]; every clone points at the same pool.
#[derive(Clone)]
pub struct Db {
    pool: Arc<PgPool>,
}

impl Db {
    /// Wrap an existing pool. The caller constructs one pool per process.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Build the pool and establish an initial connection. Failures here
    /// are startup-fatal; there is no per-request retry.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Connectivity probe used by the readiness route.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }

    /// Explicit shutdown: close the pool and wait for connections to drop.
    /// Call once while the process is exiting.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
