//! Command-line interface for fill-db
//!
//! # Usage Examples
//!
//! ```bash
//! # 1000 users, 5000 messages, connection from .env / DB_* variables
//! fill-db --users 1000 --messages 5000
//!
//! # Same thing with short flags and a different content seed
//! fill-db -u 1000 -m 5000 --seed 7
//! ```
//!
//! ## Environment
//! - `DB_HOST` (default `0.0.0.0`), `DB_PORT` (default `5432`)
//! - `DB_USER` (default `postgres`), `DB_PASSWORD` (no default)
//! - `DB_NAME` (default `postgres`), `DB_POOL_SIZE` (default `4`)
//! - `RUST_LOG` (default `info`)

use clap::Parser;
use fill_db::{run_cli, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // A missing .env file is fine; explicit variables still apply
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let report = run_cli(&cli).await?;

    tracing::info!(
        "Fill complete: {} users ({:.2} rows/sec), {} messages ({:.2} rows/sec), max user id {}",
        report.users.rows_inserted,
        report.users.rows_per_second(),
        report.messages.rows_inserted,
        report.messages.rows_per_second(),
        report.user_max_id
    );

    Ok(())
}
