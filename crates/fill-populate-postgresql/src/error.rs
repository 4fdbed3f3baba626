//! Error types for the PostgreSQL populator.

use thiserror::Error;

/// Errors that can occur during PostgreSQL population.
#[derive(Error, Debug)]
pub enum PostgreSQLPopulatorError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// Could not check a connection out of the pool.
    #[error("Connection pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    /// The pool could not be built.
    #[error("Connection pool build error: {0}")]
    Build(#[from] deadpool_postgres::BuildError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
