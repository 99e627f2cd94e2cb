// src/services/room_service.rs
use crate::domain::room::{validate_room, Room, RoomPatch};
use crate::error::{AppError, AppResult};
use crate::repositories::{MutationOutcome, RoomRepository};
use std::sync::Arc;

pub struct RoomService {
    room_repo: Arc<dyn RoomRepository>,
}

impl RoomService {
    pub fn new(room_repo: Arc<dyn RoomRepository>) -> Self {
        Self { room_repo }
    }

    /// Add a room after checking the id is free.
    ///
    /// The lookup and the insert are separate calls, so two processes can
    /// still race on the same id; the primary key catches the loser and the
    /// insert reports it as a conflict.
    pub fn add_room(&self, room: Room) -> AppResult<MutationOutcome> {
        validate_room(&room).map_err(AppError::Domain)?;

        if self.room_repo.fetch_by_id(&room.id).is_some() {
            log::info!("Room {} already exists, insert skipped", room.id);
            return Ok(MutationOutcome::Conflict(format!(
                "Room {} already exists",
                room.id
            )));
        }

        Ok(self.room_repo.insert(&room))
    }

    pub fn list_rooms(&self) -> Vec<Room> {
        self.room_repo.fetch_all()
    }

    pub fn list_available_rooms(&self) -> Vec<Room> {
        self.room_repo.fetch_available()
    }

    pub fn find_room(&self, id: &str) -> Option<Room> {
        self.room_repo.fetch_by_id(id)
    }

    /// Merge `patch` onto the stored room and write it back
    pub fn update_room(&self, id: &str, patch: RoomPatch) -> AppResult<MutationOutcome> {
        let Some(mut room) = self.room_repo.fetch_by_id(id) else {
            return Ok(MutationOutcome::NotFound);
        };

        room.apply(patch);
        validate_room(&room).map_err(AppError::Domain)?;

        Ok(self.room_repo.update(&room))
    }

    pub fn delete_room(&self, id: &str) -> MutationOutcome {
        self.room_repo.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockRoomRepository;
    use mockall::predicate::eq;

    fn suite() -> Room {
        Room {
            id: "R1".to_string(),
            descripcion: "Suite".to_string(),
            camas: 2,
            banos: 1,
            vista: "mar".to_string(),
            balcon: true,
            precio: 120.50,
            disponible: true,
            lugar_turistico: "Playa Norte".to_string(),
        }
    }

    #[test]
    fn test_add_room_inserts_when_id_is_free() {
        let mut repo = MockRoomRepository::new();
        repo.expect_fetch_by_id().with(eq("R1")).times(1).returning(|_| None);
        repo.expect_insert()
            .withf(|room| room.id == "R1")
            .times(1)
            .returning(|_| MutationOutcome::Applied { rows: 1 });

        let service = RoomService::new(Arc::new(repo));
        assert_eq!(
            service.add_room(suite()).unwrap(),
            MutationOutcome::Applied { rows: 1 }
        );
    }

    #[test]
    fn test_add_room_with_taken_id_never_inserts() {
        let mut repo = MockRoomRepository::new();
        repo.expect_fetch_by_id().returning(|_| Some(suite()));
        repo.expect_insert().never();

        let service = RoomService::new(Arc::new(repo));
        assert!(matches!(
            service.add_room(suite()).unwrap(),
            MutationOutcome::Conflict(_)
        ));
    }

    #[test]
    fn test_add_invalid_room_touches_nothing() {
        let mut repo = MockRoomRepository::new();
        repo.expect_fetch_by_id().never();
        repo.expect_insert().never();

        let mut room = suite();
        room.precio = -10.0;

        let service = RoomService::new(Arc::new(repo));
        assert!(matches!(service.add_room(room), Err(AppError::Domain(_))));
    }

    #[test]
    fn test_update_merges_onto_stored_room() {
        let mut repo = MockRoomRepository::new();
        repo.expect_fetch_by_id().returning(|_| Some(suite()));
        repo.expect_update()
            .withf(|room| {
                let mut expected = suite();
                expected.precio = 99.99;
                *room == expected
            })
            .times(1)
            .returning(|_| MutationOutcome::Applied { rows: 1 });

        let service = RoomService::new(Arc::new(repo));
        let patch = RoomPatch {
            precio: Some(99.99),
            ..Default::default()
        };
        assert!(service.update_room("R1", patch).unwrap().is_success());
    }

    #[test]
    fn test_update_missing_room_is_not_found() {
        let mut repo = MockRoomRepository::new();
        repo.expect_fetch_by_id().returning(|_| None);
        repo.expect_update().never();

        let service = RoomService::new(Arc::new(repo));
        assert_eq!(
            service.update_room("nope", RoomPatch::default()).unwrap(),
            MutationOutcome::NotFound
        );
    }
}
