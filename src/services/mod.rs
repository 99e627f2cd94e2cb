// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod room_service;
pub mod service_catalog;

pub use room_service::RoomService;
pub use service_catalog::ServiceCatalog;

#[cfg(test)]
mod store_scenarios_tests;
