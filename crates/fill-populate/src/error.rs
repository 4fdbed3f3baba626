//! Error types raised by the fill sequence itself.

use fill_generator::GeneratorError;
use thiserror::Error;

/// Errors detected by [`crate::run_fill`] independently of the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FillError {
    /// The users table holds fewer ids than users were requested.
    #[error("User insertion incomplete: requested {expected} users but max user id is {actual}")]
    InsertionIncomplete { expected: u64, actual: i64 },

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
}
