//! Service invariants:
//!
//! 1. Identifiers are assigned by the store, never by the caller
//! 2. Mutations go through stored procedures only
//! 3. Every mutation carries an acting user (recorded, not verified)
//! 4. Name cannot be empty, price is non-negative

pub mod entity;
pub mod invariants;

pub use entity::{ActingUser, Service, ServicePatch};
pub use invariants::validate_service;
