//! Creature Service - Application service for creature management
//!
//! Every creature references exactly one zone. The zone is checked before it
//! is assigned, on create and on reassignment, so references never dangle.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::outbound::{CreatureRepositoryPort, ZoneRepositoryPort};
use crate::domain::entities::{Creature, NewCreature, Zone, ZoneRef};
use crate::domain::value_objects::{CreatureId, ZoneId};

/// Request to create a new creature
#[derive(Debug, Clone)]
pub struct CreateCreatureRequest {
    pub name: String,
    pub species: String,
    pub size: Option<f64>,
    pub danger_level: Option<i32>,
    pub health_status: String,
    pub zone_id: Option<ZoneId>,
}

/// Partial update of a creature; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateCreatureRequest {
    pub name: Option<String>,
    pub species: Option<String>,
    pub size: Option<f64>,
    pub danger_level: Option<i32>,
    pub health_status: Option<String>,
    pub zone_id: Option<ZoneId>,
}

/// A creature together with its resolved zone
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureDetails {
    pub creature: Creature,
    pub zone: ZoneRef,
}

/// Creature service trait defining the application use cases
#[async_trait]
pub trait CreatureService: Send + Sync {
    /// Create a creature in an existing zone
    async fn create(&self, request: CreateCreatureRequest) -> ServiceResult<CreatureDetails>;

    /// Get a creature by ID
    async fn get_by_id(&self, id: CreatureId) -> ServiceResult<CreatureDetails>;

    /// List every creature
    async fn get_all(&self) -> ServiceResult<Vec<CreatureDetails>>;

    /// Apply a partial update, optionally moving the creature to another zone
    async fn update(
        &self,
        id: CreatureId,
        request: UpdateCreatureRequest,
    ) -> ServiceResult<CreatureDetails>;

    /// Delete a creature that is not in critical health
    async fn delete(&self, id: CreatureId) -> ServiceResult<()>;
}

/// Default implementation of CreatureService over the repository ports
#[derive(Clone)]
pub struct CreatureServiceImpl {
    creatures: Arc<dyn CreatureRepositoryPort>,
    zones: Arc<dyn ZoneRepositoryPort>,
}

impl CreatureServiceImpl {
    pub fn new(
        creatures: Arc<dyn CreatureRepositoryPort>,
        zones: Arc<dyn ZoneRepositoryPort>,
    ) -> Self {
        Self { creatures, zones }
    }

    async fn resolve_zone(&self, id: ZoneId) -> ServiceResult<Zone> {
        self.zones
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Zone not found: {}", id)))
    }

    async fn find_creature(&self, id: CreatureId) -> ServiceResult<Creature> {
        self.creatures
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Creature not found: {}", id)))
    }

    async fn with_zone(&self, creature: Creature) -> ServiceResult<CreatureDetails> {
        let zone = self.resolve_zone(creature.zone_id).await?;
        Ok(CreatureDetails {
            creature,
            zone: zone.to_ref(),
        })
    }
}

#[async_trait]
impl CreatureService for CreatureServiceImpl {
    #[instrument(skip(self), fields(name = %request.name))]
    async fn create(&self, request: CreateCreatureRequest) -> ServiceResult<CreatureDetails> {
        let zone_id = request
            .zone_id
            .ok_or_else(|| ServiceError::invalid_argument("zoneId is required"))?;
        let zone = self.resolve_zone(zone_id).await?;

        let new_creature = NewCreature {
            name: request.name,
            species: request.species,
            size: request.size.unwrap_or_default(),
            danger_level: request.danger_level.unwrap_or_default(),
            health_status: request.health_status,
            zone_id: zone.id,
        };
        let creature = self.creatures.create(&new_creature).await?;

        info!(
            creature_id = %creature.id,
            zone_id = %zone.id,
            "Created creature: {} in zone {}",
            creature.name,
            zone.name
        );
        Ok(CreatureDetails {
            creature,
            zone: zone.to_ref(),
        })
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: CreatureId) -> ServiceResult<CreatureDetails> {
        debug!(creature_id = %id, "Fetching creature");
        let creature = self.find_creature(id).await?;
        self.with_zone(creature).await
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> ServiceResult<Vec<CreatureDetails>> {
        debug!("Listing creatures");
        let creatures = self.creatures.list().await?;

        // Resolve each distinct zone once
        let mut zones: HashMap<ZoneId, ZoneRef> = HashMap::new();
        let mut details = Vec::with_capacity(creatures.len());
        for creature in creatures {
            let zone = match zones.get(&creature.zone_id) {
                Some(zone) => zone.clone(),
                None => {
                    let zone = self.resolve_zone(creature.zone_id).await?.to_ref();
                    zones.insert(creature.zone_id, zone.clone());
                    zone
                }
            };
            details.push(CreatureDetails { creature, zone });
        }

        Ok(details)
    }

    #[instrument(skip(self, request), fields(creature_id = %id))]
    async fn update(
        &self,
        id: CreatureId,
        request: UpdateCreatureRequest,
    ) -> ServiceResult<CreatureDetails> {
        let mut creature = self.find_creature(id).await?;

        if let Some(name) = request.name {
            creature.name = name;
        }
        if let Some(species) = request.species {
            creature.species = species;
        }
        if let Some(size) = request.size {
            creature.size = size;
        }
        if let Some(danger_level) = request.danger_level {
            creature.danger_level = danger_level;
        }
        if let Some(health_status) = request.health_status {
            creature.health_status = health_status;
        }

        let zone = match request.zone_id {
            Some(zone_id) => {
                let zone = self.resolve_zone(zone_id).await?;
                creature.zone_id = zone.id;
                zone
            }
            None => self.resolve_zone(creature.zone_id).await?,
        };

        self.creatures.update(&creature).await?;

        info!(creature_id = %creature.id, zone_id = %zone.id, "Updated creature: {}", creature.name);
        Ok(CreatureDetails {
            creature,
            zone: zone.to_ref(),
        })
    }

    #[instrument(skip(self), fields(creature_id = %id))]
    async fn delete(&self, id: CreatureId) -> ServiceResult<()> {
        let creature = self.find_creature(id).await?;

        if creature.is_critical() {
            debug!("Refusing to delete creature in critical health");
            return Err(ServiceError::conflict_state(
                "Cannot delete a creature in critical health",
            ));
        }

        self.creatures.delete(creature.id).await?;

        info!(creature_id = %id, "Deleted creature: {}", creature.name);
        Ok(())
    }
}
