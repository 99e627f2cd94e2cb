// src/domain/mod.rs
//
// Domain Root
//
// Declares the record types and re-exports their public API.
// Other modules import from `crate::domain::*`.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod room;
pub mod service;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Room Domain
pub use room::{validate_room, Room, RoomPatch};

// Service Domain
pub use service::{validate_service, ActingUser, Service, ServicePatch};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
