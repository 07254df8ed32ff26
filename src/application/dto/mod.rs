//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so the wire shape (camelCase keys,
//! embedded zone references) stays decoupled from the domain model.
//! Field-level structural rules are declared here; cross-entity rules belong
//! to the services.

pub mod creature;
mod validation;
pub mod zone;

pub use creature::*;
pub use zone::*;
