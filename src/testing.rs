//! Test infrastructure for PostgreSQL integration tests.
//!
//! Integration tests run against a live server configured through
//! `POSTGRESQL_TEST_HOST`, `POSTGRESQL_TEST_PORT`, `POSTGRESQL_TEST_USER`,
//! `POSTGRESQL_TEST_PASSWORD` and `POSTGRESQL_TEST_DATABASE`.

use anyhow::Result;
use fill_populate_postgresql::{ConnectionConfig, PostgreSQLConnectionArgs};
use tokio_postgres::{Client, NoTls};

/// Schema the fill expects. The tool itself never creates it.
pub const CREATE_SCHEMA_SQL: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        login TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS messages (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT NOT NULL REFERENCES users(id),
        text TEXT NOT NULL
    );
";

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Connection args pointing at the test server.
pub fn test_connection_args() -> PostgreSQLConnectionArgs {
    PostgreSQLConnectionArgs {
        db_host: env_or("POSTGRESQL_TEST_HOST", "postgresql"),
        db_port: env_or("POSTGRESQL_TEST_PORT", "5432")
            .parse()
            .unwrap_or(5432),
        db_user: env_or("POSTGRESQL_TEST_USER", "postgres"),
        db_password: Some(env_or("POSTGRESQL_TEST_PASSWORD", "postgres")),
        db_name: env_or("POSTGRESQL_TEST_DATABASE", "testdb"),
        pool_size: 2,
    }
}

/// Connection config pointing at the test server.
pub fn test_connection_config() -> ConnectionConfig {
    ConnectionConfig::from(&test_connection_args())
}

/// Open a plain client for test setup and assertions.
pub async fn connect_test_client() -> Result<Client> {
    let config = test_connection_config();
    let (client, connection) = config.pg_config().connect(NoTls).await?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("PostgreSQL connection error: {}", e);
        }
    });

    Ok(client)
}

/// Drop and recreate `users` and `messages` so ids restart at 1.
pub async fn reset_schema(client: &Client) -> Result<()> {
    client
        .batch_execute("DROP TABLE IF EXISTS messages; DROP TABLE IF EXISTS users;")
        .await?;
    client.batch_execute(CREATE_SCHEMA_SQL).await?;
    Ok(())
}

/// Row count of `table_name`.
pub async fn count_rows(client: &Client, table_name: &str) -> Result<i64> {
    let row = client
        .query_one(&format!("SELECT COUNT(*) FROM \"{table_name}\""), &[])
        .await?;
    Ok(row.get(0))
}
