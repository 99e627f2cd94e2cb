pub mod entity;
pub mod invariants;

pub use entity::{Room, RoomPatch};
pub use invariants::validate_room;
