// src/db/migrations.rs
//
// Schema bootstrap for the hotel store
//
// Tables: habitaciones, servicios, servicio_auditoria, schema_version.
// A fresh file gets the whole schema in one transaction. A file stamped
// with any other version is refused; there are no automatic migrations.

use rusqlite::{Connection, OptionalExtension};

use crate::db::Flag;
use crate::error::{AppError, AppResult};

const SCHEMA_VERSION: i32 = 1;
const SCHEMA_SQL: &str = include_str!("../../schema.sql");

/// Create the schema on a fresh store, or check the stamp on an existing one.
/// Safe to call on every startup.
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    match get_schema_version(conn)? {
        0 => {
            log::info!("Empty store, creating schema v{}", SCHEMA_VERSION);
            apply_schema(conn)
        }
        SCHEMA_VERSION => {
            log::debug!("Schema v{} already present", SCHEMA_VERSION);
            Ok(())
        }
        found if found < SCHEMA_VERSION => Err(AppError::Other(format!(
            "Schema version {} is outdated, expected {}. Manual migration required.",
            found, SCHEMA_VERSION
        ))),
        found => Err(AppError::Other(format!(
            "Schema version {} is newer than supported {}. Update the application.",
            found, SCHEMA_VERSION
        ))),
    }
}

/// Highest stamped version, 0 when the store has never been initialized
pub fn get_schema_version(conn: &Connection) -> AppResult<i32> {
    let stamped: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'",
            [],
            |row| row.get(0),
        )
        .optional()?;

    if stamped.is_none() {
        return Ok(0);
    }

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}

fn apply_schema(conn: &Connection) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [SCHEMA_VERSION],
    )?;
    tx.commit()?;
    Ok(())
}

/// Runs SQLite's integrity check
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    if result != "ok" {
        return Err(AppError::Other(format!(
            "Database integrity check failed: {}",
            result
        )));
    }

    Ok(())
}

/// Size and row counts, for the `status` command
pub fn get_database_stats(conn: &Connection) -> AppResult<DatabaseStats> {
    let page_count: i64 = conn
        .query_row("PRAGMA page_count", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    let page_size: i64 = conn
        .query_row("PRAGMA page_size", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    let room_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM habitaciones", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    let available_room_count: i64 = conn
        .query_row(
            &format!(
                "SELECT COUNT(*) FROM habitaciones WHERE {}",
                Flag::true_condition("disponible")
            ),
            [],
            |row| row.get(0),
        )
        .map_err(AppError::Database)?;

    let service_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM servicios", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    let audit_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM servicio_auditoria", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    Ok(DatabaseStats {
        schema_version: get_schema_version(conn)?,
        size_bytes: page_count * page_size,
        room_count,
        available_room_count,
        service_count,
        audit_count,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseStats {
    pub schema_version: i32,
    pub size_bytes: i64,
    pub room_count: i64,
    pub available_room_count: i64,
    pub service_count: i64,
    pub audit_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_test_connection;

    #[test]
    fn test_initialize_fresh_database() {
        let conn = create_test_connection().unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), 0);

        initialize_database(&conn).unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), 1);

        for table in ["habitaciones", "servicios", "servicio_auditoria"] {
            let exists: bool = conn
                .query_row(
                    "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert!(exists, "missing table {}", table);
        }
    }

    #[test]
    fn test_initialize_idempotent() {
        let conn = create_test_connection().unwrap();

        initialize_database(&conn).unwrap();
        initialize_database(&conn).unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), 1);
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version, applied_at) VALUES (99, datetime('now'))",
            [],
        )
        .unwrap();

        let err = initialize_database(&conn).unwrap_err();
        assert!(matches!(err, AppError::Other(_)));
        assert!(err.to_string().contains("newer than supported"));
    }

    #[test]
    fn test_outdated_schema_is_rejected() {
        let conn = create_test_connection().unwrap();
        conn.execute_batch(
            "CREATE TABLE schema_version (version INTEGER PRIMARY KEY, applied_at TEXT NOT NULL);
             INSERT INTO schema_version (version, applied_at) VALUES (-1, datetime('now'));",
        )
        .unwrap();

        let err = initialize_database(&conn).unwrap_err();
        assert!(matches!(err, AppError::Other(_)));
        assert!(err.to_string().contains("outdated"));
    }

    #[test]
    fn test_room_primary_key_enforced() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        let insert = "INSERT INTO habitaciones
            (id, descripcion, camas, banos, vista, balcon, precio, disponible, lugar_turistico)
            VALUES ('R1', 'Suite', 2, 1, 'mar', 1, 120.5, 1, 'Playa Norte')";
        conn.execute(insert, []).unwrap();

        assert!(conn.execute(insert, []).is_err());
    }

    #[test]
    fn test_negative_price_rejected_by_store() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO servicios (nombre, precio) VALUES ('Spa', -1)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_database_stats() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        conn.execute(
            "INSERT INTO habitaciones
             (id, descripcion, camas, banos, vista, balcon, precio, disponible, lugar_turistico)
             VALUES ('R1', 'Suite', 2, 1, 'mar', 1, 120.5, 0, ''),
                    ('R2', 'Doble', 1, 1, 'ciudad', 'false', 80.0, 'true', ''),
                    ('R3', 'Simple', 1, 1, 'ciudad', 0, 60.0, 1, '')",
            [],
        )
        .unwrap();

        let stats = get_database_stats(&conn).unwrap();

        assert!(stats.size_bytes > 0);
        assert_eq!(stats.schema_version, 1);
        assert_eq!(stats.room_count, 3);
        assert_eq!(stats.available_room_count, 2);
        assert_eq!(stats.service_count, 0);
        assert_eq!(stats.audit_count, 0);
    }

    #[test]
    fn test_integrity_check() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        verify_database_integrity(&conn).unwrap();
    }
}
