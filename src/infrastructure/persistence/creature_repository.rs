use async_trait::async_trait;
use sqlx::SqlitePool;

use super::map_sqlx_error;
use crate::application::ports::outbound::{CreatureRepositoryPort, RepoError};
use crate::domain::entities::{Creature, NewCreature};
use crate::domain::value_objects::{CreatureId, ZoneId};

const CREATURE_COLUMNS: &str = "id, name, species, size, danger_level, health_status, zone_id";

#[derive(sqlx::FromRow)]
struct CreatureRow {
    id: i64,
    name: String,
    species: String,
    size: f64,
    danger_level: i32,
    health_status: String,
    zone_id: i64,
}

impl From<CreatureRow> for Creature {
    fn from(row: CreatureRow) -> Self {
        Self {
            id: CreatureId::new(row.id),
            name: row.name,
            species: row.species,
            size: row.size,
            danger_level: row.danger_level,
            health_status: row.health_status,
            zone_id: ZoneId::new(row.zone_id),
        }
    }
}

/// SQLite repository for Creature operations
#[derive(Clone)]
pub struct SqliteCreatureRepository {
    pool: SqlitePool,
}

impl SqliteCreatureRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreatureRepositoryPort for SqliteCreatureRepository {
    async fn create(&self, creature: &NewCreature) -> Result<Creature, RepoError> {
        let result = sqlx::query(
            r#"
            INSERT INTO creatures (name, species, size, danger_level, health_status, zone_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&creature.name)
        .bind(&creature.species)
        .bind(creature.size)
        .bind(creature.danger_level)
        .bind(&creature.health_status)
        .bind(creature.zone_id.value())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Creature {
            id: CreatureId::new(result.last_insert_rowid()),
            name: creature.name.clone(),
            species: creature.species.clone(),
            size: creature.size,
            danger_level: creature.danger_level,
            health_status: creature.health_status.clone(),
            zone_id: creature.zone_id,
        })
    }

    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepoError> {
        let row: Option<CreatureRow> = sqlx::query_as(&format!(
            "SELECT {} FROM creatures WHERE id = ?",
            CREATURE_COLUMNS
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Creature::from))
    }

    async fn list(&self) -> Result<Vec<Creature>, RepoError> {
        let rows: Vec<CreatureRow> = sqlx::query_as(&format!(
            "SELECT {} FROM creatures ORDER BY id",
            CREATURE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Creature::from).collect())
    }

    async fn update(&self, creature: &Creature) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            UPDATE creatures
            SET name = ?, species = ?, size = ?, danger_level = ?, health_status = ?, zone_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&creature.name)
        .bind(&creature.species)
        .bind(creature.size)
        .bind(creature.danger_level)
        .bind(&creature.health_status)
        .bind(creature.zone_id.value())
        .bind(creature.id.value())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: CreatureId) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM creatures WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn count_by_zone(&self, zone_id: ZoneId) -> Result<i64, RepoError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM creatures WHERE zone_id = ?")
            .bind(zone_id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::ZoneRepositoryPort;
    use crate::domain::entities::NewZone;
    use crate::infrastructure::persistence::SqliteRepository;

    fn grifo(zone_id: ZoneId) -> NewCreature {
        NewCreature {
            name: "Grifo".to_string(),
            species: "Gryphon".to_string(),
            size: 2.5,
            danger_level: 4,
            health_status: "stable".to_string(),
            zone_id,
        }
    }

    #[tokio::test]
    async fn create_update_and_delete_round_trip() {
        let store = SqliteRepository::connect("sqlite::memory:", 1).await.unwrap();
        let zone = store.zones().create(&NewZone::new("Bosque")).await.unwrap();
        let other = store.zones().create(&NewZone::new("Valle")).await.unwrap();
        let repo = store.creatures();

        let mut creature = repo.create(&grifo(zone.id)).await.unwrap();
        assert_eq!(repo.get(creature.id).await.unwrap(), Some(creature.clone()));

        creature.health_status = "critical".to_string();
        creature.zone_id = other.id;
        repo.update(&creature).await.unwrap();
        assert_eq!(repo.get(creature.id).await.unwrap(), Some(creature.clone()));

        repo.delete(creature.id).await.unwrap();
        assert!(repo.get(creature.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn count_by_zone_counts_only_that_zone() {
        let store = SqliteRepository::connect("sqlite::memory:", 1).await.unwrap();
        let bosque = store.zones().create(&NewZone::new("Bosque")).await.unwrap();
        let valle = store.zones().create(&NewZone::new("Valle")).await.unwrap();
        let repo = store.creatures();

        repo.create(&grifo(bosque.id)).await.unwrap();
        repo.create(&grifo(bosque.id)).await.unwrap();

        assert_eq!(repo.count_by_zone(bosque.id).await.unwrap(), 2);
        assert_eq!(repo.count_by_zone(valle.id).await.unwrap(), 0);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn dangling_zone_reference_is_a_constraint_violation() {
        let store = SqliteRepository::connect("sqlite::memory:", 1).await.unwrap();

        let err = store
            .creatures()
            .create(&grifo(ZoneId::new(404)))
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Constraint(_)));
    }
}
