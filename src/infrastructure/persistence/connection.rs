use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Open the SQLite pool with foreign keys enforced
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database URL: {}", database_url))?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to SQLite database")
}

/// Create tables and indexes if they do not exist yet
///
/// Zones carry a lowercased `name_key` under a unique constraint, so concurrent
/// idempotent creates cannot store two names that differ only by case.
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS zones (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            name_key TEXT NOT NULL,
            description TEXT,
            capacity INTEGER,
            CONSTRAINT uk_zone_name UNIQUE (name_key)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS creatures (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            species TEXT NOT NULL,
            size REAL NOT NULL,
            danger_level INTEGER NOT NULL,
            health_status TEXT NOT NULL,
            zone_id INTEGER NOT NULL REFERENCES zones(id)
        )
        "#,
        "CREATE INDEX IF NOT EXISTS idx_creatures_zone_id ON creatures(zone_id)",
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("Failed to initialize database schema")?;
    }

    Ok(())
}
