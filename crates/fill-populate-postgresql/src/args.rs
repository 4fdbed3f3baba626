//! CLI argument definitions for the PostgreSQL connection.

use clap::Args;

/// PostgreSQL connection arguments, each overridable from the environment.
#[derive(Args, Clone, Debug)]
pub struct PostgreSQLConnectionArgs {
    /// PostgreSQL host
    #[arg(long, env = "DB_HOST", default_value = "0.0.0.0")]
    pub db_host: String,

    /// PostgreSQL port
    #[arg(long, env = "DB_PORT", default_value = "5432")]
    pub db_port: u16,

    /// PostgreSQL user
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// PostgreSQL password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// PostgreSQL database name
    #[arg(long, env = "DB_NAME", default_value = "postgres")]
    pub db_name: String,

    /// Maximum number of pooled connections
    #[arg(long, env = "DB_POOL_SIZE", default_value = "4")]
    pub pool_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        connection: PostgreSQLConnectionArgs,
    }

    #[test]
    fn test_explicit_flags() {
        let cli = TestCli::parse_from([
            "fill",
            "--db-host",
            "db.internal",
            "--db-port",
            "6543",
            "--db-user",
            "seed",
            "--db-password",
            "secret",
            "--db-name",
            "chat",
            "--pool-size",
            "2",
        ]);

        assert_eq!(cli.connection.db_host, "db.internal");
        assert_eq!(cli.connection.db_port, 6543);
        assert_eq!(cli.connection.db_user, "seed");
        assert_eq!(cli.connection.db_password.as_deref(), Some("secret"));
        assert_eq!(cli.connection.db_name, "chat");
        assert_eq!(cli.connection.pool_size, 2);
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(TestCli::try_parse_from(["fill", "--db-port", "not-a-port"]).is_err());
    }
}
