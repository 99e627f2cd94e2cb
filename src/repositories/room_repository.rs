// src/repositories/room_repository.rs
//
// Room persistence - direct statements against `habitaciones`

use rusqlite::types::{Type, Value};
use rusqlite::Row;

use crate::db::{Flag, FlagEncoding};
use crate::domain::room::Room;
use crate::repositories::gateway::{Gateway, Operation, RowExpectation};
use crate::repositories::MutationOutcome;

#[cfg_attr(test, mockall::automock)]
pub trait RoomRepository: Send + Sync {
    /// Insert a new room. Duplicates come back as `Conflict`.
    fn insert(&self, room: &Room) -> MutationOutcome;
    fn fetch_all(&self) -> Vec<Room>;
    fn fetch_available(&self) -> Vec<Room>;
    fn fetch_by_id(&self, id: &str) -> Option<Room>;
    /// Rewrite every mutable column. A missing id is not an error here.
    fn update(&self, room: &Room) -> MutationOutcome;
    fn delete(&self, id: &str) -> MutationOutcome;
}

pub struct SqliteRoomRepository {
    gateway: Gateway,
}

impl SqliteRoomRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    fn encoding(&self) -> FlagEncoding {
        self.gateway.flag_encoding()
    }

    /// Map database row to Room
    fn row_to_room(row: &Row) -> Result<Room, rusqlite::Error> {
        let camas: i64 = row.get("camas")?;
        let camas = u32::try_from(camas)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Integer, Box::new(e)))?;

        let banos: i64 = row.get("banos")?;
        let banos = u32::try_from(banos)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Integer, Box::new(e)))?;

        let Flag(balcon) = row.get("balcon")?;
        let Flag(disponible) = row.get("disponible")?;

        Ok(Room {
            id: row.get("id")?,
            descripcion: row.get("descripcion")?,
            camas,
            banos,
            vista: row.get("vista")?,
            balcon,
            precio: row.get("precio")?,
            disponible,
            lugar_turistico: row.get("lugar_turistico")?,
        })
    }
}

impl RoomRepository for SqliteRoomRepository {
    fn insert(&self, room: &Room) -> MutationOutcome {
        let encoding = self.encoding();
        log::debug!(
            "Inserting room {} (balcon={}, disponible={})",
            room.id,
            room.balcon,
            room.disponible
        );

        let outcome = self.gateway.mutate(
            "room insert",
            Operation::Statement {
                sql: "INSERT INTO habitaciones (
                        id, descripcion, camas, banos, vista,
                        balcon, precio, disponible, lugar_turistico
                      ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params: vec![
                    Value::Text(room.id.clone()),
                    Value::Text(room.descripcion.clone()),
                    Value::Integer(i64::from(room.camas)),
                    Value::Integer(i64::from(room.banos)),
                    Value::Text(room.vista.clone()),
                    encoding.encode(room.balcon),
                    Value::Real(room.precio),
                    encoding.encode(room.disponible),
                    Value::Text(room.lugar_turistico.clone()),
                ],
            },
            RowExpectation::AtLeastOne,
        );

        match outcome {
            MutationOutcome::NotFound => {
                MutationOutcome::Conflict(format!("No rows inserted for room {}", room.id))
            }
            other => other,
        }
    }

    fn fetch_all(&self) -> Vec<Room> {
        self.gateway.fetch_all(
            "room list",
            "SELECT id, descripcion, camas, banos, vista, balcon, precio, disponible, lugar_turistico
             FROM habitaciones
             ORDER BY id",
            &[],
            Self::row_to_room,
        )
    }

    /// Filters on every stored form of "true", not only the configured one
    fn fetch_available(&self) -> Vec<Room> {
        let sql = format!(
            "SELECT id, descripcion, camas, banos, vista, balcon, precio, disponible, lugar_turistico
             FROM habitaciones
             WHERE {}
             ORDER BY id",
            Flag::true_condition("disponible")
        );
        self.gateway
            .fetch_all("room list available", &sql, &[], Self::row_to_room)
    }

    fn fetch_by_id(&self, id: &str) -> Option<Room> {
        self.gateway.fetch_optional(
            "room lookup",
            "SELECT id, descripcion, camas, banos, vista, balcon, precio, disponible, lugar_turistico
             FROM habitaciones
             WHERE id = ?1",
            &[Value::Text(id.to_string())],
            Self::row_to_room,
        )
    }

    fn update(&self, room: &Room) -> MutationOutcome {
        let encoding = self.encoding();

        self.gateway.mutate(
            "room update",
            Operation::Statement {
                sql: "UPDATE habitaciones
                      SET descripcion = ?1, camas = ?2, banos = ?3, vista = ?4,
                          balcon = ?5, precio = ?6, disponible = ?7, lugar_turistico = ?8
                      WHERE id = ?9",
                params: vec![
                    Value::Text(room.descripcion.clone()),
                    Value::Integer(i64::from(room.camas)),
                    Value::Integer(i64::from(room.banos)),
                    Value::Text(room.vista.clone()),
                    encoding.encode(room.balcon),
                    Value::Real(room.precio),
                    encoding.encode(room.disponible),
                    Value::Text(room.lugar_turistico.clone()),
                    Value::Text(room.id.clone()),
                ],
            },
            RowExpectation::Any,
        )
    }

    fn delete(&self, id: &str) -> MutationOutcome {
        self.gateway.mutate(
            "room delete",
            Operation::Statement {
                sql: "DELETE FROM habitaciones WHERE id = ?1",
                params: vec![Value::Text(id.to_string())],
            },
            RowExpectation::AtLeastOne,
        )
    }
}
