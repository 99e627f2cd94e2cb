// src/repositories/service_repository.rs
//
// Service persistence
//
// Mutations only go through the store procedures; the one read is a direct
// query. Duplicate prevention is left to the store.

use rusqlite::types::Value;
use rusqlite::Row;

use crate::db::StoredProcedure;
use crate::domain::service::{ActingUser, Service};
use crate::repositories::gateway::{Gateway, Operation, RowExpectation};
use crate::repositories::MutationOutcome;

#[cfg_attr(test, mockall::automock)]
pub trait ServiceRepository: Send + Sync {
    fn create(&self, acting_user: ActingUser, nombre: &str, precio: f64) -> MutationOutcome;
    fn edit(&self, acting_user: ActingUser, service_id: i64, nombre: &str, precio: f64) -> MutationOutcome;
    fn delete(&self, acting_user: ActingUser, service_id: i64) -> MutationOutcome;
    fn fetch_all(&self) -> Vec<Service>;
}

pub struct SqliteServiceRepository {
    gateway: Gateway,
}

impl SqliteServiceRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    fn row_to_service(row: &Row) -> Result<Service, rusqlite::Error> {
        Ok(Service {
            id: row.get("id")?,
            nombre: row.get("nombre")?,
            precio: row.get("precio")?,
        })
    }

    fn call(&self, procedure: StoredProcedure, args: Vec<Value>, expect: RowExpectation) -> MutationOutcome {
        self.gateway
            .mutate(procedure.name(), Operation::Procedure { procedure, args }, expect)
    }
}

impl ServiceRepository for SqliteServiceRepository {
    fn create(&self, acting_user: ActingUser, nombre: &str, precio: f64) -> MutationOutcome {
        self.call(
            StoredProcedure::RegistrarServicio,
            vec![
                Value::Integer(acting_user),
                Value::Text(nombre.to_string()),
                Value::Real(precio),
            ],
            RowExpectation::Any,
        )
    }

    fn edit(&self, acting_user: ActingUser, service_id: i64, nombre: &str, precio: f64) -> MutationOutcome {
        self.call(
            StoredProcedure::EditarServicio,
            vec![
                Value::Integer(acting_user),
                Value::Integer(service_id),
                Value::Text(nombre.to_string()),
                Value::Real(precio),
            ],
            RowExpectation::AtLeastOne,
        )
    }

    fn delete(&self, acting_user: ActingUser, service_id: i64) -> MutationOutcome {
        self.call(
            StoredProcedure::EliminarServicio,
            vec![Value::Integer(acting_user), Value::Integer(service_id)],
            RowExpectation::AtLeastOne,
        )
    }

    fn fetch_all(&self) -> Vec<Service> {
        self.gateway.fetch_all(
            "service list",
            "SELECT id, nombre, precio FROM servicios ORDER BY id",
            &[],
            Self::row_to_service,
        )
    }
}
