//! SQLite persistence adapters
//!
//! This module implements the repository ports on SQLite through sqlx,
//! providing CRUD operations and the zone summary query.

mod connection;
mod creature_repository;
mod zone_repository;

pub use creature_repository::SqliteCreatureRepository;
pub use zone_repository::SqliteZoneRepository;

use anyhow::Result;
use sqlx::SqlitePool;

use crate::application::ports::outbound::RepoError;

/// Combined repository providing access to all domain repositories
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Connect and make sure the schema exists
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = connection::connect(database_url, max_connections).await?;
        connection::initialize_schema(&pool).await?;
        Ok(Self { pool })
    }

    pub fn zones(&self) -> SqliteZoneRepository {
        SqliteZoneRepository::new(self.pool.clone())
    }

    pub fn creatures(&self) -> SqliteCreatureRepository {
        SqliteCreatureRepository::new(self.pool.clone())
    }
}

/// Classify a sqlx failure: integrity rules become `Constraint`, keeping the
/// driver's message so the HTTP layer can tell duplicates apart
pub(crate) fn map_sqlx_error(e: sqlx::Error) -> RepoError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() || db.is_foreign_key_violation() || db.is_check_violation() {
            return RepoError::Constraint(db.message().to_string());
        }
    }
    RepoError::Database(e.to_string())
}
