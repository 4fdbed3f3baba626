//! Row types produced by the generators.

/// A generated `users` row. The store assigns the `id` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    /// Position of this row in the generation sequence.
    pub index: u64,
    /// Login in the form `user_<index>_<username>`.
    pub login: String,
    /// Hex encoded SHA-256 digest of the shared seed password.
    pub password_hash: String,
}

/// A generated `messages` row. The store assigns the `id` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    /// Referenced `users.id`.
    pub user_id: i64,
    pub text: String,
}
