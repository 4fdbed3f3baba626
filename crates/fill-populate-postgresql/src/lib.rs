//! PostgreSQL populator for fill-db.
//!
//! Provides the connection pool built from `DB_*` settings and a
//! [`PostgreSQLPopulator`] that writes generated users and messages with one
//! bulk statement per table.

pub mod args;
pub mod error;
pub mod insert;
pub mod pool;
pub mod populator;

pub use args::PostgreSQLConnectionArgs;
pub use error::PostgreSQLPopulatorError;
pub use pool::{ConnectionConfig, ConnectionPool};
pub use populator::PostgreSQLPopulator;
