//! Application services - Use case implementations
//!
//! Each service follows hexagonal architecture principles, accepting
//! repository ports and returning domain entities.

pub mod creature_service;
pub mod zone_service;

pub use creature_service::{
    CreateCreatureRequest, CreatureDetails, CreatureService, CreatureServiceImpl,
    UpdateCreatureRequest,
};
pub use zone_service::{
    CreateZoneRequest, UpdateZoneRequest, ZoneCreation, ZoneService, ZoneServiceImpl,
};
