//! Bulk INSERT logic for the users and messages tables.
//!
//! Each table is written with one statement that unnests column arrays, so a
//! phase is a single round trip regardless of row count and is not bound by
//! the per-statement parameter limit.

use crate::error::PostgreSQLPopulatorError;
use fill_generator::{MessageRow, UserRow};
use tokio_postgres::Transaction;

/// Insert all user rows in one statement.
pub const INSERT_USERS_SQL: &str = "INSERT INTO users (login, password_hash) \
     SELECT * FROM UNNEST($1::text[], $2::text[])";

/// Insert all message rows in one statement.
pub const INSERT_MESSAGES_SQL: &str = "INSERT INTO messages (user_id, text) \
     SELECT * FROM UNNEST($1::bigint[], $2::text[])";

/// Highest user id, `0` for an empty table.
pub const SELECT_USER_MAX_ID_SQL: &str = "SELECT COALESCE(MAX(id), 0)::BIGINT FROM users";

/// Split user rows into the column arrays bound to [`INSERT_USERS_SQL`].
pub fn user_columns(rows: &[UserRow]) -> (Vec<&str>, Vec<&str>) {
    rows.iter()
        .map(|row| (row.login.as_str(), row.password_hash.as_str()))
        .unzip()
}

/// Split message rows into the column arrays bound to [`INSERT_MESSAGES_SQL`].
pub fn message_columns(rows: &[MessageRow]) -> (Vec<i64>, Vec<&str>) {
    rows.iter()
        .map(|row| (row.user_id, row.text.as_str()))
        .unzip()
}

/// Insert a batch of users inside `tx`.
pub async fn insert_users(
    tx: &Transaction<'_>,
    rows: &[UserRow],
) -> Result<u64, PostgreSQLPopulatorError> {
    if rows.is_empty() {
        return Ok(0);
    }

    let (logins, hashes) = user_columns(rows);
    Ok(tx.execute(INSERT_USERS_SQL, &[&logins, &hashes]).await?)
}

/// Insert a batch of messages inside `tx`.
pub async fn insert_messages(
    tx: &Transaction<'_>,
    rows: &[MessageRow],
) -> Result<u64, PostgreSQLPopulatorError> {
    if rows.is_empty() {
        return Ok(0);
    }

    let (user_ids, texts) = message_columns(rows);
    Ok(tx.execute(INSERT_MESSAGES_SQL, &[&user_ids, &texts]).await?)
}
