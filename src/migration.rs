//! Schema DDL for `bakeries` and `baked_goods`. Idempotent; safe to run on every startup.

use crate::error::AppError;
use sqlx::SqlitePool;

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS bakeries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS baked_goods (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price REAL NOT NULL,
        bakery_id INTEGER NOT NULL REFERENCES bakeries (id),
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_baked_goods_bakery_id ON baked_goods (bakery_id)",
];

const TABLES: &[&str] = &["bakeries", "baked_goods"];

/// Create both tables and the `bakery_id` index if they do not exist yet.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for ddl in MIGRATIONS {
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::debug!(statements = MIGRATIONS.len(), "migrations applied");
    Ok(())
}

/// Tables of the schema that do not exist yet, in creation order.
pub async fn missing_tables(pool: &SqlitePool) -> Result<Vec<&'static str>, AppError> {
    let present: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table'")
            .fetch_all(pool)
            .await?;
    Ok(TABLES
        .iter()
        .copied()
        .filter(|t| !present.iter().any(|(name,)| name == t))
        .collect())
}
