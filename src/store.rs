//! SQLite connection pool.

use crate::config::Config;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Open the pool described by `config`, creating the database file when missing.
/// Foreign keys are enforced on every connection.
pub async fn connect(config: &Config) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| ConfigError::InvalidVar {
            var: "DATABASE_URL",
            message: e.to_string(),
        })?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_opts = if config.is_in_memory() {
        // Each connection to an in-memory database sees its own empty database.
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_opts.connect_with(opts).await?;
    tracing::info!(url = %config.database_url, "database pool ready");
    Ok(pool)
}
