//! Domain layer - Core business objects with no infrastructure dependencies
//!
//! This layer contains:
//! - Entities: Zone, Creature and the zone summary row
//! - Value Objects: typed identifiers

pub mod entities;
pub mod value_objects;
