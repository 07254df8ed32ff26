//! Zone Service - Application service for zone management
//!
//! Creation is idempotent by name (ignoring case): asking for a zone that
//! already exists returns the stored record untouched. Deletion is refused
//! while creatures are still assigned to the zone.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::outbound::{CreatureRepositoryPort, ZoneRepositoryPort};
use crate::domain::entities::{NewZone, Zone, ZoneSummary};
use crate::domain::value_objects::ZoneId;

/// Request to create a zone (or fetch the one with the same name)
#[derive(Debug, Clone)]
pub struct CreateZoneRequest {
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
}

/// Partial update of a zone; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateZoneRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
}

/// Outcome of an idempotent create
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneCreation {
    Created(Zone),
    Existing(Zone),
}

impl ZoneCreation {
    pub fn into_zone(self) -> Zone {
        match self {
            Self::Created(zone) | Self::Existing(zone) => zone,
        }
    }
}

/// Zone service trait defining the application use cases
#[async_trait]
pub trait ZoneService: Send + Sync {
    /// Create a zone, or return the existing zone with the same name
    async fn create_or_get(&self, request: CreateZoneRequest) -> ServiceResult<ZoneCreation>;

    /// Apply a partial update to a zone
    async fn update(&self, id: ZoneId, request: UpdateZoneRequest) -> ServiceResult<Zone>;

    /// Get a zone by ID
    async fn find_one(&self, id: ZoneId) -> ServiceResult<Zone>;

    /// Every zone with its creature count, ordered by name
    async fn find_summary(&self) -> ServiceResult<Vec<ZoneSummary>>;

    /// Delete a zone that has no creatures assigned
    async fn delete(&self, id: ZoneId) -> ServiceResult<()>;
}

/// Default implementation of ZoneService over the repository ports
#[derive(Clone)]
pub struct ZoneServiceImpl {
    zones: Arc<dyn ZoneRepositoryPort>,
    creatures: Arc<dyn CreatureRepositoryPort>,
}

impl ZoneServiceImpl {
    pub fn new(
        zones: Arc<dyn ZoneRepositoryPort>,
        creatures: Arc<dyn CreatureRepositoryPort>,
    ) -> Self {
        Self { zones, creatures }
    }

    /// Trim a supplied name, rejecting it with `message` if nothing is left
    fn normalize_name(name: &str, message: &str) -> ServiceResult<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::invalid_argument(message));
        }
        Ok(trimmed.to_string())
    }
}

#[async_trait]
impl ZoneService for ZoneServiceImpl {
    #[instrument(skip(self), fields(name = %request.name))]
    async fn create_or_get(&self, request: CreateZoneRequest) -> ServiceResult<ZoneCreation> {
        let name = Self::normalize_name(&request.name, "Zone name is required")?;

        if let Some(existing) = self.zones.find_by_name_ignore_case(&name).await? {
            debug!(zone_id = %existing.id, "Zone already exists, returning it unchanged");
            return Ok(ZoneCreation::Existing(existing));
        }

        let new_zone = NewZone::new(name)
            .with_description(request.description)
            .with_capacity(request.capacity);
        let zone = self.zones.create(&new_zone).await?;

        info!(zone_id = %zone.id, "Created zone: {}", zone.name);
        Ok(ZoneCreation::Created(zone))
    }

    #[instrument(skip(self, request), fields(zone_id = %id))]
    async fn update(&self, id: ZoneId, request: UpdateZoneRequest) -> ServiceResult<Zone> {
        let mut zone = self.find_one(id).await?;

        if let Some(name) = request.name {
            zone.name = Self::normalize_name(&name, "Zone name cannot be blank")?;
        }
        if request.description.is_some() {
            zone.description = request.description;
        }
        if request.capacity.is_some() {
            zone.capacity = request.capacity;
        }

        self.zones.update(&zone).await?;

        info!(zone_id = %zone.id, "Updated zone: {}", zone.name);
        Ok(zone)
    }

    #[instrument(skip(self))]
    async fn find_one(&self, id: ZoneId) -> ServiceResult<Zone> {
        debug!(zone_id = %id, "Fetching zone");
        self.zones
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Zone not found: {}", id)))
    }

    #[instrument(skip(self))]
    async fn find_summary(&self) -> ServiceResult<Vec<ZoneSummary>> {
        debug!("Listing zone summaries");
        Ok(self.zones.summaries().await?)
    }

    #[instrument(skip(self), fields(zone_id = %id))]
    async fn delete(&self, id: ZoneId) -> ServiceResult<()> {
        let zone = self.find_one(id).await?;

        let assigned = self.creatures.count_by_zone(zone.id).await?;
        if assigned > 0 {
            debug!(assigned, "Refusing to delete occupied zone");
            return Err(ServiceError::conflict_state(
                "Cannot delete zone with assigned creatures",
            ));
        }

        self.zones.delete(zone.id).await?;

        info!(zone_id = %id, "Deleted zone: {}", zone.name);
        Ok(())
    }
}
