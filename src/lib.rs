//! fill-db library
//!
//! Seeds the `users` and `messages` tables of a PostgreSQL database with
//! synthetic data for testing and load generation.
//!
//! # Crates
//!
//! - `fill_generator` - seeded user and message row generation
//! - `fill_populate` - the store-agnostic fill sequence and `SeedSink` trait
//! - `fill_populate_postgresql` - connection pool and bulk inserts for PostgreSQL
//!
//! # CLI Usage
//!
//! ```bash
//! # Defaults: 100000 users and 100000 messages
//! DB_PASSWORD=secret fill-db
//!
//! # Small run against a named database
//! fill-db -u 5 -m 3 --db-host localhost --db-name chat
//! ```

use anyhow::Context;
use clap::Parser;
use fill_populate::{run_fill, CommonFillArgs, FillPlan, FillReport};
use fill_populate_postgresql::{
    ConnectionConfig, ConnectionPool, PostgreSQLConnectionArgs, PostgreSQLPopulator,
};

pub mod testing;

pub use fill_generator as generator;
pub use fill_populate as populate;
pub use fill_populate_postgresql as postgresql;

#[derive(Parser, Clone, Debug)]
#[command(name = "fill-db")]
#[command(about = "Fill the users and messages tables with synthetic data")]
#[command(long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub fill: CommonFillArgs,

    /// PostgreSQL connection options
    #[command(flatten)]
    pub connection: PostgreSQLConnectionArgs,
}

impl Cli {
    /// The fill plan described by the parsed arguments.
    pub fn plan(&self) -> FillPlan {
        FillPlan::new(self.fill.users, self.fill.messages, self.fill.seed)
    }
}

/// Connect, run the fill sequence and close the pool.
///
/// The pool is closed whether or not the fill succeeds.
pub async fn run_cli(cli: &Cli) -> anyhow::Result<FillReport> {
    let config = ConnectionConfig::from(&cli.connection);
    let pool = ConnectionPool::connect(&config)
        .await
        .context("Failed to connect to PostgreSQL")?;

    let populator = PostgreSQLPopulator::new(pool.clone());
    let result = run_fill(&populator, &cli.plan()).await;

    pool.close();
    result
}
