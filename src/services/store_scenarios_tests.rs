// src/services/store_scenarios_tests.rs
//
// End-to-end scenarios against a real SQLite file
//
// PURPOSE:
// - Drive RoomService and ServiceCatalog through the real repositories
// - Prove that every call opens and closes its own connection
// - Prove that failed mutations leave no partial writes
//
// INVARIANTS TESTED:
// - Available rooms are always a subset of all rooms, across updates,
//   deletes and a change of flag encoding
// - A duplicate room id is reported as Conflict, never as success
// - Both flag encodings read back the same booleans
// - An unreachable store yields empty reads and StoreFault mutations
// - A procedure that affects no row leaves no audit entry

#[cfg(test)]
mod scenarios {
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::application::AppState;
    use crate::config::{AppConfig, StoreConfig};
    use crate::db::{get_database_stats, ConnectionFactory, FlagEncoding};
    use crate::domain::{Room, RoomPatch, ServicePatch};
    use crate::repositories::{
        Gateway, MutationOutcome, RoomRepository, ServiceRepository, SqliteRoomRepository,
        SqliteServiceRepository,
    };

    fn open(encoding: FlagEncoding) -> (TempDir, AppState) {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig {
            store: StoreConfig::for_path(dir.path().join("hotel.db")),
            ..AppConfig::default()
        };
        config.store.flag_encoding = encoding;
        let state = AppState::open(&config).unwrap();
        (dir, state)
    }

    fn room(id: &str, disponible: bool) -> Room {
        Room {
            id: id.to_string(),
            descripcion: "Suite".to_string(),
            camas: 2,
            banos: 1,
            vista: "mar".to_string(),
            balcon: true,
            precio: 120.5,
            disponible,
            lugar_turistico: "Playa Norte".to_string(),
        }
    }

    fn audit_count(state: &AppState) -> i64 {
        let conn = state.connections.connect().unwrap();
        conn.query_row("SELECT COUNT(*) FROM servicio_auditoria", [], |r| r.get(0))
            .unwrap()
    }

    #[test]
    fn test_room_lifecycle() {
        let (_dir, state) = open(FlagEncoding::Numeric);
        let rooms = &state.room_service;

        assert!(rooms.add_room(room("R1", true)).unwrap().is_success());
        assert_eq!(rooms.find_room("R1").unwrap(), room("R1", true));

        let patch = RoomPatch {
            precio: Some(99.99),
            ..RoomPatch::default()
        };
        assert!(rooms.update_room("R1", patch).unwrap().is_success());
        assert_eq!(rooms.find_room("R1").unwrap().precio, 99.99);

        assert_eq!(rooms.delete_room("R1"), MutationOutcome::Applied { rows: 1 });
        assert!(rooms.find_room("R1").is_none());
        assert_eq!(rooms.delete_room("R1"), MutationOutcome::NotFound);
    }

    #[test]
    fn test_service_lifecycle_is_audited() {
        let (_dir, state) = open(FlagEncoding::Numeric);
        let catalog = &state.service_catalog;

        assert!(catalog.register("Spa", 30.0).unwrap().is_success());
        let spa = catalog.list().into_iter().next().unwrap();

        let patch = ServicePatch {
            nombre: Some("Spa Deluxe".to_string()),
            precio: Some(45.0),
        };
        assert!(catalog.edit(spa.id, patch).unwrap().is_success());

        let edited = catalog.find(spa.id).unwrap();
        assert_eq!(edited.nombre, "Spa Deluxe");
        assert_eq!(edited.precio, 45.0);

        assert!(catalog.remove(spa.id).is_success());
        assert!(catalog.list().is_empty());
        assert_eq!(audit_count(&state), 3);
    }

    #[test]
    fn test_duplicate_room_at_every_layer() {
        let (_dir, state) = open(FlagEncoding::Numeric);
        state.room_service.add_room(room("R1", true)).unwrap();

        let outcome = state.room_service.add_room(room("R1", false)).unwrap();
        assert!(matches!(outcome, MutationOutcome::Conflict(_)));

        // Bypassing the pre-check still hits the primary key
        let repo = SqliteRoomRepository::new(Gateway::new(state.connections.clone()));
        assert!(matches!(repo.insert(&room("R1", false)), MutationOutcome::Conflict(_)));

        assert_eq!(state.room_service.list_rooms().len(), 1);
        assert!(state.room_service.find_room("R1").unwrap().disponible);
    }

    #[test]
    fn test_available_subset_of_all() {
        for encoding in [FlagEncoding::Numeric, FlagEncoding::Text] {
            let (_dir, state) = open(encoding);
            state.room_service.add_room(room("R1", true)).unwrap();
            state.room_service.add_room(room("R2", false)).unwrap();
            state.room_service.add_room(room("R3", true)).unwrap();

            let all = state.room_service.list_rooms();
            let available = state.room_service.list_available_rooms();

            assert_eq!(all.len(), 3);
            assert_eq!(available.len(), 2);
            assert!(available.iter().all(|r| r.disponible && all.contains(r)));
        }
    }

    #[test]
    fn test_available_follows_mutations_and_encodings() {
        let (dir, state) = open(FlagEncoding::Text);
        let rooms = &state.room_service;
        for id in ["R1", "R2", "R3"] {
            rooms.add_room(room(id, true)).unwrap();
        }

        let ids = |list: Vec<Room>| list.into_iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids(rooms.list_available_rooms()), ["R1", "R2", "R3"]);

        let patch = RoomPatch {
            disponible: Some(false),
            ..RoomPatch::default()
        };
        assert!(rooms.update_room("R1", patch).unwrap().is_success());
        assert_eq!(ids(rooms.list_available_rooms()), ["R2", "R3"]);
        assert_eq!(rooms.list_rooms().len(), 3);

        assert!(rooms.delete_room("R3").is_success());
        assert_eq!(ids(rooms.list_available_rooms()), ["R2"]);
        assert_eq!(ids(rooms.list_rooms()), ["R1", "R2"]);

        // Reopen with the other encoding and write one more row, so the file
        // holds both 'true' and 1
        let mut config = AppConfig {
            store: StoreConfig::for_path(dir.path().join("hotel.db")),
            ..AppConfig::default()
        };
        config.store.flag_encoding = FlagEncoding::Numeric;
        let numeric = AppState::open(&config).unwrap();
        numeric.room_service.add_room(room("R4", true)).unwrap();
        numeric.room_service.add_room(room("R5", false)).unwrap();

        for view in [&state, &numeric] {
            let expected: Vec<Room> = view
                .room_service
                .list_rooms()
                .into_iter()
                .filter(|r| r.disponible)
                .collect();
            assert_eq!(view.room_service.list_available_rooms(), expected);
            assert_eq!(ids(expected), ["R2", "R4"]);
        }

        let stats = get_database_stats(&numeric.connections.connect().unwrap()).unwrap();
        assert_eq!(stats.room_count, 4);
        assert_eq!(stats.available_room_count, 2);
    }

    #[test]
    fn test_encodings_read_each_other() {
        let (dir, state) = open(FlagEncoding::Text);
        state.room_service.add_room(room("R1", true)).unwrap();

        let raw: String = state
            .connections
            .connect()
            .unwrap()
            .query_row("SELECT disponible FROM habitaciones WHERE id = 'R1'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(raw, "true");

        // Same file reopened with the numeric encoding
        let mut config = StoreConfig::for_path(dir.path().join("hotel.db"));
        config.flag_encoding = FlagEncoding::Numeric;
        let repo = SqliteRoomRepository::new(Gateway::new(Arc::new(ConnectionFactory::new(config))));

        let found = repo.fetch_by_id("R1").unwrap();
        assert!(found.disponible);
        assert!(found.balcon);
    }

    #[test]
    fn test_unreachable_store() {
        let dir = TempDir::new().unwrap();
        let mut config = StoreConfig::for_path(dir.path().join("missing").join("hotel.db"));
        config.create_if_missing = false;

        let gateway = Gateway::new(Arc::new(ConnectionFactory::new(config)));
        let rooms = SqliteRoomRepository::new(gateway.clone());
        let services = SqliteServiceRepository::new(gateway);

        assert!(rooms.fetch_all().is_empty());
        assert!(rooms.fetch_available().is_empty());
        assert!(rooms.fetch_by_id("R1").is_none());
        assert!(services.fetch_all().is_empty());

        assert!(matches!(rooms.insert(&room("R1", true)), MutationOutcome::StoreFault(_)));
        assert!(matches!(services.create(1, "Spa", 30.0), MutationOutcome::StoreFault(_)));
    }

    #[test]
    fn test_missing_service_leaves_no_audit() {
        let (_dir, state) = open(FlagEncoding::Numeric);
        let repo = SqliteServiceRepository::new(Gateway::new(state.connections.clone()));

        assert_eq!(repo.edit(1, 404, "Nada", 1.0), MutationOutcome::NotFound);
        assert_eq!(repo.delete(1, 404), MutationOutcome::NotFound);
        assert_eq!(audit_count(&state), 0);
    }

    #[test]
    fn test_rejected_edit_rolls_back() {
        let (_dir, state) = open(FlagEncoding::Numeric);
        state.service_catalog.register("Spa", 30.0).unwrap();
        let spa = state.service_catalog.list().into_iter().next().unwrap();

        // Negative price is stopped by the CHECK constraint inside the procedure
        let repo = SqliteServiceRepository::new(Gateway::new(state.connections.clone()));
        assert!(matches!(repo.edit(1, spa.id, "Spa", -5.0), MutationOutcome::Conflict(_)));

        assert_eq!(state.service_catalog.find(spa.id).unwrap().precio, 30.0);
        assert_eq!(audit_count(&state), 1);
    }

    #[test]
    fn test_update_missing_room() {
        let (_dir, state) = open(FlagEncoding::Numeric);

        let repo = SqliteRoomRepository::new(Gateway::new(state.connections.clone()));
        assert_eq!(repo.update(&room("R9", true)), MutationOutcome::Applied { rows: 0 });

        let outcome = state
            .room_service
            .update_room("R9", RoomPatch::default())
            .unwrap();
        assert_eq!(outcome, MutationOutcome::NotFound);
    }
}
