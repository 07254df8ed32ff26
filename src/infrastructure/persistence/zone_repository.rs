use async_trait::async_trait;
use sqlx::SqlitePool;

use super::map_sqlx_error;
use crate::application::ports::outbound::{RepoError, ZoneRepositoryPort};
use crate::domain::entities::{NewZone, Zone, ZoneSummary};
use crate::domain::value_objects::ZoneId;

#[derive(sqlx::FromRow)]
struct ZoneRow {
    id: i64,
    name: String,
    description: Option<String>,
    capacity: Option<i32>,
}

impl From<ZoneRow> for Zone {
    fn from(row: ZoneRow) -> Self {
        Self {
            id: ZoneId::new(row.id),
            name: row.name,
            description: row.description,
            capacity: row.capacity,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ZoneSummaryRow {
    id: i64,
    name: String,
    description: Option<String>,
    capacity: Option<i32>,
    creature_count: i64,
}

impl From<ZoneSummaryRow> for ZoneSummary {
    fn from(row: ZoneSummaryRow) -> Self {
        Self {
            id: ZoneId::new(row.id),
            name: row.name,
            description: row.description,
            capacity: row.capacity,
            creature_count: row.creature_count,
        }
    }
}

/// Case-insensitive lookup key for a zone name
///
/// Unicode lowercase, folded here because SQLite NOCASE covers ASCII only.
fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// SQLite repository for Zone operations
#[derive(Clone)]
pub struct SqliteZoneRepository {
    pool: SqlitePool,
}

impl SqliteZoneRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ZoneRepositoryPort for SqliteZoneRepository {
    async fn create(&self, zone: &NewZone) -> Result<Zone, RepoError> {
        let result = sqlx::query(
            "INSERT INTO zones (name, name_key, description, capacity) VALUES (?, ?, ?, ?)",
        )
        .bind(&zone.name)
        .bind(name_key(&zone.name))
        .bind(&zone.description)
        .bind(zone.capacity)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Zone {
            id: ZoneId::new(result.last_insert_rowid()),
            name: zone.name.clone(),
            description: zone.description.clone(),
            capacity: zone.capacity,
        })
    }

    async fn get(&self, id: ZoneId) -> Result<Option<Zone>, RepoError> {
        let row: Option<ZoneRow> =
            sqlx::query_as("SELECT id, name, description, capacity FROM zones WHERE id = ?")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(Zone::from))
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Zone>, RepoError> {
        let row: Option<ZoneRow> = sqlx::query_as(
            "SELECT id, name, description, capacity FROM zones WHERE name_key = ?",
        )
        .bind(name_key(name))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Zone::from))
    }

    async fn update(&self, zone: &Zone) -> Result<(), RepoError> {
        sqlx::query(
            "UPDATE zones SET name = ?, name_key = ?, description = ?, capacity = ? WHERE id = ?",
        )
        .bind(&zone.name)
        .bind(name_key(&zone.name))
        .bind(&zone.description)
        .bind(zone.capacity)
        .bind(zone.id.value())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: ZoneId) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM zones WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn summaries(&self) -> Result<Vec<ZoneSummary>, RepoError> {
        let rows: Vec<ZoneSummaryRow> = sqlx::query_as(
            r#"
            SELECT z.id, z.name, z.description, z.capacity, COUNT(c.id) AS creature_count
            FROM zones z
            LEFT JOIN creatures c ON c.zone_id = z.id
            GROUP BY z.id, z.name, z.name_key, z.description, z.capacity
            ORDER BY z.name_key ASC, z.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ZoneSummary::from).collect())
    }
}
