//! PostgreSQL populator writing generated users and messages.

use crate::error::PostgreSQLPopulatorError;
use crate::insert::{self, SELECT_USER_MAX_ID_SQL};
use crate::pool::ConnectionPool;
use fill_generator::{MessageRow, UserRow};
use fill_populate::SeedSink;
use tracing::debug;

/// PostgreSQL populator that inserts generated rows through a connection pool.
///
/// Every insert checks out one connection, runs one statement inside one
/// transaction and commits. On error the transaction is dropped without a
/// commit and the store rolls it back.
#[derive(Clone)]
pub struct PostgreSQLPopulator {
    pool: ConnectionPool,
}

impl PostgreSQLPopulator {
    /// Create a new PostgreSQL populator using an existing pool.
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Insert user rows in one transaction.
    pub async fn insert_users(&self, rows: &[UserRow]) -> Result<u64, PostgreSQLPopulatorError> {
        let mut client = self.pool.connection().await?;
        let tx = client.transaction().await?;
        let inserted = insert::insert_users(&tx, rows).await?;
        tx.commit().await?;

        debug!("Committed {} user rows", inserted);
        Ok(inserted)
    }

    /// Insert message rows in one transaction.
    pub async fn insert_messages(
        &self,
        rows: &[MessageRow],
    ) -> Result<u64, PostgreSQLPopulatorError> {
        let mut client = self.pool.connection().await?;
        let tx = client.transaction().await?;
        let inserted = insert::insert_messages(&tx, rows).await?;
        tx.commit().await?;

        debug!("Committed {} message rows", inserted);
        Ok(inserted)
    }

    /// Highest `users.id`, or `0` when the table is empty.
    pub async fn fetch_user_max_id(&self) -> Result<i64, PostgreSQLPopulatorError> {
        let client = self.pool.connection().await?;
        let row = client.query_one(SELECT_USER_MAX_ID_SQL, &[]).await?;
        Ok(row.try_get(0)?)
    }
}

#[async_trait::async_trait]
impl SeedSink for PostgreSQLPopulator {
    async fn insert_users(&self, rows: &[UserRow]) -> anyhow::Result<u64> {
        Ok(PostgreSQLPopulator::insert_users(self, rows).await?)
    }

    async fn fetch_user_max_id(&self) -> anyhow::Result<i64> {
        Ok(PostgreSQLPopulator::fetch_user_max_id(self).await?)
    }

    async fn insert_messages(&self, rows: &[MessageRow]) -> anyhow::Result<u64> {
        Ok(PostgreSQLPopulator::insert_messages(self, rows).await?)
    }
}
