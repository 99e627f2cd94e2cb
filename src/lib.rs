// src/lib.rs
// Hotel inventory - console management of rooms and hotel services
//
// Architecture:
// - Domain: entities, patches and their invariants
// - Data access: one short-lived SQLite connection and transaction per call
// - Services: validation and orchestration above the repositories
// - Application: role-based console menus
// - Explicit: every mutation reports a tagged outcome, never a bare flag

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_room,
    validate_service,
    ActingUser,
    DomainError,
    // Room
    Room,
    RoomPatch,
    // Service
    Service,
    ServicePatch,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::{AppConfig, SessionConfig, StoreConfig};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{initialize_database, ConnectionFactory, FlagEncoding, StoredProcedure};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    Gateway,
    MutationOutcome,
    Operation,
    RoomRepository,
    RowExpectation,
    ServiceRepository,
    SqliteRoomRepository,
    SqliteServiceRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{RoomService, ServiceCatalog};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;
