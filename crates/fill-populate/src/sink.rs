//! SeedSink trait definition.
//!
//! The trait abstracts over the store so the fill sequence in
//! [`crate::seeder`] can be written once and exercised against an in-memory
//! sink in tests.

use anyhow::Result;
use fill_generator::{MessageRow, UserRow};

/// Trait for writing generated rows to a store.
///
/// Each insert method must write all rows as one unit: either every row is
/// committed or none is.
#[async_trait::async_trait]
pub trait SeedSink: Send + Sync {
    /// Insert user rows in a single transaction. Returns the number of rows written.
    async fn insert_users(&self, rows: &[UserRow]) -> Result<u64>;

    /// Highest `users.id` currently stored, or `0` for an empty table.
    async fn fetch_user_max_id(&self) -> Result<i64>;

    /// Insert message rows in a single transaction. Returns the number of rows written.
    async fn insert_messages(&self, rows: &[MessageRow]) -> Result<u64>;
}
