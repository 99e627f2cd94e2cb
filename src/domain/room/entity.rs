use serde::{Deserialize, Serialize};

/// A bookable room in the hotel catalog.
///
/// Field names match the `habitaciones` columns, so a serialized room is the
/// column-keyed record the CLI and export work with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// User supplied identifier, unique across rooms
    pub id: String,

    /// Free text description
    pub descripcion: String,

    /// Number of beds
    pub camas: u32,

    /// Number of bathrooms
    pub banos: u32,

    /// View category (mar, montaña, ciudad, ...)
    pub vista: String,

    /// Whether the room has a balcony
    pub balcon: bool,

    /// Nightly price
    pub precio: f64,

    /// Whether the room can currently be offered to clients
    pub disponible: bool,

    /// Nearby tourist attraction
    pub lugar_turistico: String,
}

/// Partial update for a room. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomPatch {
    pub descripcion: Option<String>,
    pub camas: Option<u32>,
    pub banos: Option<u32>,
    pub vista: Option<String>,
    pub balcon: Option<bool>,
    pub precio: Option<f64>,
    pub disponible: Option<bool>,
    pub lugar_turistico: Option<String>,
}

impl RoomPatch {
    pub fn is_empty(&self) -> bool {
        *self == RoomPatch::default()
    }
}

impl Room {
    /// Merge a patch onto this room. The identifier never changes.
    pub fn apply(&mut self, patch: RoomPatch) {
        if let Some(descripcion) = patch.descripcion {
            self.descripcion = descripcion;
        }
        if let Some(camas) = patch.camas {
            self.camas = camas;
        }
        if let Some(banos) = patch.banos {
            self.banos = banos;
        }
        if let Some(vista) = patch.vista {
            self.vista = vista;
        }
        if let Some(balcon) = patch.balcon {
            self.balcon = balcon;
        }
        if let Some(precio) = patch.precio {
            self.precio = precio;
        }
        if let Some(disponible) = patch.disponible {
            self.disponible = disponible;
        }
        if let Some(lugar) = patch.lugar_turistico {
            self.lugar_turistico = lugar;
        }
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.descripcion)
    }
}
