use serde::{Deserialize, Serialize};

/// Identifier of the operator performing a service mutation.
///
/// Passed through to the store procedures and written to the audit table.
/// Nothing checks it against an identity store.
pub type ActingUser = i64;

/// An extra the hotel sells (spa, breakfast, transfer, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Store assigned identifier
    pub id: i64,

    /// Display name
    pub nombre: String,

    /// Price per use
    pub precio: f64,
}

/// Partial update for a service. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicePatch {
    pub nombre: Option<String>,
    pub precio: Option<f64>,
}

impl Service {
    pub fn apply(&mut self, patch: ServicePatch) {
        if let Some(nombre) = patch.nombre {
            self.nombre = nombre;
        }
        if let Some(precio) = patch.precio {
            self.precio = precio;
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nombre)
    }
}
