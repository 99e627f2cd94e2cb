// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above the services and below the binary
// - Owns the console boundary: prompts, type coercion, rendering
// - Translates outcomes and errors into user-facing messages
// - Never talks to the store directly

pub mod commands;
pub mod console;
pub mod display;
pub mod dto;
pub mod error_handling;
pub mod input;
pub mod menu;
pub mod state;

pub use console::{Console, RustylineConsole};
pub use dto::CatalogExport;
pub use menu::{run, Role};
pub use state::AppState;
