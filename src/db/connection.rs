// src/db/connection.rs
//
// Connection factory
//
// PRINCIPLES:
// - One connection per repository call, never pooled, never reused
// - Connection parameters come from StoreConfig, nothing is compiled in
// - Failure to connect is an explicit error value
// - The returned handle closes itself on every exit path

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

use crate::config::StoreConfig;
use crate::db::FlagEncoding;
use crate::error::{AppError, AppResult};

/// Produces single-use connections to the configured store
#[derive(Debug, Clone)]
pub struct ConnectionFactory {
    config: StoreConfig,
}

impl ConnectionFactory {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn flag_encoding(&self) -> FlagEncoding {
        self.config.flag_encoding
    }

    /// Open a fresh connection.
    ///
    /// No retry: an unreachable or unopenable store is reported as
    /// `AppError::Connection` straight away.
    pub fn connect(&self) -> AppResult<ScopedConnection> {
        let path = &self.config.database_path;

        let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        if self.config.create_if_missing {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::Connection(format!("Cannot create {}: {}", parent.display(), e))
                })?;
            }
            flags |= OpenFlags::SQLITE_OPEN_CREATE;
        }

        let conn = Connection::open_with_flags(path, flags).map_err(|e| {
            log::error!("Failed to connect to {}: {}", path.display(), e);
            AppError::Connection(format!("{}: {}", path.display(), e))
        })?;

        conn.busy_timeout(Duration::from_millis(self.config.busy_timeout_ms))
            .map_err(|e| AppError::Connection(format!("Failed to set busy timeout: {}", e)))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| AppError::Connection(format!("Failed to configure connection: {}", e)))?;

        log::debug!("Connection opened: {}", path.display());

        Ok(ScopedConnection {
            conn,
            location: path.display().to_string(),
        })
    }
}

/// A connection that is closed when it goes out of scope
pub struct ScopedConnection {
    conn: Connection,
    location: String,
}

impl Deref for ScopedConnection {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.conn
    }
}

impl DerefMut for ScopedConnection {
    fn deref_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

impl Drop for ScopedConnection {
    fn drop(&mut self) {
        log::debug!("Connection closed: {}", self.location);
    }
}

/// Create a standalone in-memory connection (for testing)
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory().map_err(AppError::Database)?;

    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(AppError::Database)?;

    Ok(conn)
}
