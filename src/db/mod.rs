// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection factory (one scoped connection per call)
// - Schema initialization
// - Flag column encoding
// - Store-side procedures

pub mod connection;
pub mod flag;
pub mod migrations;
pub mod procedures;

pub use connection::{create_test_connection, ConnectionFactory, ScopedConnection};

pub use flag::{Flag, FlagEncoding};

pub use migrations::{
    get_database_stats, get_schema_version, initialize_database, verify_database_integrity,
    DatabaseStats,
};

pub use procedures::StoredProcedure;
