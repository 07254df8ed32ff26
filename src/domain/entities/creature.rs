//! Creature entity - Animals assigned to exactly one zone

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CreatureId, ZoneId};

/// Health status value that blocks deletion
const CRITICAL_HEALTH: &str = "critical";

/// A creature living in a zone
///
/// The zone is held by id only; callers resolve it when they need the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    pub species: String,
    pub size: f64,
    pub danger_level: i32,
    pub health_status: String,
    pub zone_id: ZoneId,
}

impl Creature {
    /// Whether the creature is in critical health (compared ignoring case)
    pub fn is_critical(&self) -> bool {
        self.health_status.eq_ignore_ascii_case(CRITICAL_HEALTH)
    }
}

/// A creature that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewCreature {
    pub name: String,
    pub species: String,
    pub size: f64,
    pub danger_level: i32,
    pub health_status: String,
    pub zone_id: ZoneId,
}
