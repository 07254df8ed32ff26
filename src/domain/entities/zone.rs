//! Zone entity - Named enclosures that creatures are assigned to

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ZoneId;

/// A zone of the park
///
/// Names are unique ignoring case. Capacity is descriptive only: nothing
/// checks it against the number of creatures assigned to the zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
}

impl Zone {
    /// Compact reference used when a zone is embedded in another resource
    pub fn to_ref(&self) -> ZoneRef {
        ZoneRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// A zone that has not been stored yet (storage assigns the id)
#[derive(Debug, Clone, PartialEq)]
pub struct NewZone {
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
}

impl NewZone {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            capacity: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_capacity(mut self, capacity: Option<i32>) -> Self {
        self.capacity = capacity;
        self
    }
}

/// The id and name of a zone, resolved on demand for creature responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRef {
    pub id: ZoneId,
    pub name: String,
}

/// Zone row of the aggregate summary, with the number of assigned creatures
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSummary {
    pub id: ZoneId,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub creature_count: i64,
}
