// src/config.rs
//
// Process-wide configuration
//
// Loaded once at startup from an optional TOML file, then handed to the
// connection factory and the session. CLI flags override file values in
// main.rs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::db::FlagEncoding;
use crate::domain::ActingUser;
use crate::error::{AppError, AppResult};

const APP_DIR: &str = "hotel-inventory";
const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "hotel.db";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub session: SessionConfig,
}

/// Where the store lives and how it is opened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// How boolean columns are persisted
    pub flag_encoding: FlagEncoding,

    /// How long SQLite waits on a locked database before failing
    pub busy_timeout_ms: u64,

    /// Create the database file (and its directory) when missing
    pub create_if_missing: bool,
}

/// Values attached to every operation of one console session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Acting user passed to the service procedures
    pub acting_user: ActingUser,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            flag_encoding: FlagEncoding::default(),
            busy_timeout_ms: 5000,
            create_if_missing: true,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { acting_user: 1 }
    }
}

impl StoreConfig {
    /// Config pointing at a specific database file, defaults elsewhere
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: path.into(),
            ..Self::default()
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// read if present, otherwise built-in defaults are used.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(default) if default.exists() => Self::from_file(&default),
                _ => {
                    log::debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&raw)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> AppResult<Self> {
        Ok(toml::from_str(raw)?)
    }
}

/// `{CONFIG_DIR}/hotel-inventory/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// `{APP_DATA}/hotel-inventory/hotel.db`, or `./hotel.db` when the platform
/// has no data directory
pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(DATABASE_FILE))
        .unwrap_or_else(|| PathBuf::from(DATABASE_FILE))
}
