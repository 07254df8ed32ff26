//! Domain entities - Core business objects with identity

mod creature;
mod zone;

pub use creature::{Creature, NewCreature};
pub use zone::{NewZone, Zone, ZoneRef, ZoneSummary};
