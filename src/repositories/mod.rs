// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are data mappers over one table each
// - NO business logic, NO cross-repository calls
// - Explicit SQL or named procedures only
// - Every fault is turned into an outcome at this boundary

pub mod gateway;
pub mod outcome;
pub mod room_repository;
pub mod service_repository;

pub use gateway::{Gateway, Operation, RowExpectation};
pub use outcome::MutationOutcome;
pub use room_repository::{RoomRepository, SqliteRoomRepository};
pub use service_repository::{ServiceRepository, SqliteServiceRepository};

#[cfg(test)]
pub use room_repository::MockRoomRepository;
#[cfg(test)]
pub use service_repository::MockServiceRepository;
