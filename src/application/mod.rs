//! Application layer - Use cases and the ports they depend on
//!
//! This layer contains:
//! - Services: zone and creature lifecycle rules
//! - Ports: repository traits implemented by infrastructure
//! - DTOs: request and response shapes for the HTTP boundary

pub mod dto;
pub mod errors;
pub mod ports;
pub mod services;
