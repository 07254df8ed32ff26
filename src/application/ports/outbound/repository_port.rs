//! Repository ports - Interfaces for data persistence
//!
//! These traits define the contracts that infrastructure repositories must implement.
//! Application services depend on these traits, not concrete implementations.

use async_trait::async_trait;

use crate::domain::entities::{Creature, NewCreature, NewZone, Zone, ZoneSummary};
use crate::domain::value_objects::{CreatureId, ZoneId};

/// Failures reported by a repository
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// A uniqueness or integrity rule fired at the storage boundary
    #[error("Constraint violation: {0}")]
    Constraint(String),
    #[error("Database error: {0}")]
    Database(String),
}

// =============================================================================
// Zone Repository Port
// =============================================================================

/// Repository port for Zone operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ZoneRepositoryPort: Send + Sync {
    /// Insert a new zone and return it with its assigned id
    async fn create(&self, zone: &NewZone) -> Result<Zone, RepoError>;

    /// Get a zone by ID
    async fn get(&self, id: ZoneId) -> Result<Option<Zone>, RepoError>;

    /// Find a zone whose name matches ignoring case
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Zone>, RepoError>;

    /// Overwrite a stored zone
    async fn update(&self, zone: &Zone) -> Result<(), RepoError>;

    /// Delete a zone
    async fn delete(&self, id: ZoneId) -> Result<(), RepoError>;

    /// Every zone with its creature count, ordered by name
    async fn summaries(&self) -> Result<Vec<ZoneSummary>, RepoError>;
}

// =============================================================================
// Creature Repository Port
// =============================================================================

/// Repository port for Creature operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreatureRepositoryPort: Send + Sync {
    /// Insert a new creature and return it with its assigned id
    async fn create(&self, creature: &NewCreature) -> Result<Creature, RepoError>;

    /// Get a creature by ID
    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepoError>;

    /// List all creatures
    async fn list(&self) -> Result<Vec<Creature>, RepoError>;

    /// Overwrite a stored creature
    async fn update(&self, creature: &Creature) -> Result<(), RepoError>;

    /// Delete a creature
    async fn delete(&self, id: CreatureId) -> Result<(), RepoError>;

    /// Number of creatures assigned to a zone
    async fn count_by_zone(&self, zone_id: ZoneId) -> Result<i64, RepoError>;
}
