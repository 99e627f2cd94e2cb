// src/application/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{initialize_database, ConnectionFactory};
use crate::error::AppResult;
use crate::repositories::{
    Gateway, RoomRepository, ServiceRepository, SqliteRoomRepository, SqliteServiceRepository,
};
use crate::services::{RoomService, ServiceCatalog};

/// Everything a console session needs, wired once at startup
pub struct AppState {
    pub connections: Arc<ConnectionFactory>,
    pub room_service: Arc<RoomService>,
    pub service_catalog: Arc<ServiceCatalog>,
}

impl AppState {
    /// Build the object graph and make sure the schema exists
    pub fn open(config: &AppConfig) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let connections = Arc::new(ConnectionFactory::new(config.store.clone()));
        {
            let conn = connections.connect()?;
            initialize_database(&conn)?;
        }
        let gateway = Gateway::new(connections.clone());

        // 2. REPOSITORIES
        let room_repo: Arc<dyn RoomRepository> = Arc::new(SqliteRoomRepository::new(gateway.clone()));
        let service_repo: Arc<dyn ServiceRepository> = Arc::new(SqliteServiceRepository::new(gateway));

        // 3. SERVICES
        let room_service = Arc::new(RoomService::new(room_repo));
        let service_catalog = Arc::new(ServiceCatalog::new(service_repo, config.session.acting_user));

        Ok(Self {
            connections,
            room_service,
            service_catalog,
        })
    }
}
