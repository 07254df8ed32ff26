//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{CreatureServiceImpl, ZoneServiceImpl};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::SqliteRepository;

/// Shared application state
pub struct AppState {
    // Application services
    pub zone_service: ZoneServiceImpl,
    pub creature_service: CreatureServiceImpl,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        // Initialize SQLite repository
        let repository =
            SqliteRepository::connect(&config.database_url, config.database_max_connections)
                .await?;

        Ok(Self::with_repository(repository))
    }

    /// Wire the services over an already connected repository
    pub fn with_repository(repository: SqliteRepository) -> Self {
        let zones = Arc::new(repository.zones());
        let creatures = Arc::new(repository.creatures());

        // Initialize application services
        let zone_service = ZoneServiceImpl::new(zones.clone(), creatures.clone());
        let creature_service = CreatureServiceImpl::new(creatures, zones);

        Self {
            zone_service,
            creature_service,
        }
    }
}
