// src/application/dto.rs
//
// Serializable views for the `export` command

use serde::Serialize;

use crate::domain::{Room, Service};

/// Full catalog dump. Records keep their column names as keys.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogExport {
    pub generated_at: String,
    pub habitaciones: Vec<Room>,
    pub servicios: Vec<Service>,
}

impl CatalogExport {
    pub fn new(habitaciones: Vec<Room>, servicios: Vec<Service>) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            habitaciones,
            servicios,
        }
    }
}
