// src/services/service_catalog.rs
use crate::domain::service::{validate_service, ActingUser, Service, ServicePatch};
use crate::error::{AppError, AppResult};
use crate::repositories::{MutationOutcome, ServiceRepository};
use std::sync::Arc;

/// Hotel services as one session sees them.
///
/// Every mutation is attributed to `acting_user`. The value is forwarded to
/// the store and audited there; it is not checked against any identity
/// store.
pub struct ServiceCatalog {
    service_repo: Arc<dyn ServiceRepository>,
    acting_user: ActingUser,
}

impl ServiceCatalog {
    pub fn new(service_repo: Arc<dyn ServiceRepository>, acting_user: ActingUser) -> Self {
        Self {
            service_repo,
            acting_user,
        }
    }

    pub fn acting_user(&self) -> ActingUser {
        self.acting_user
    }

    pub fn register(&self, nombre: &str, precio: f64) -> AppResult<MutationOutcome> {
        validate_service(nombre, precio).map_err(AppError::Domain)?;
        Ok(self.service_repo.create(self.acting_user, nombre, precio))
    }

    pub fn list(&self) -> Vec<Service> {
        self.service_repo.fetch_all()
    }

    /// Looks the service up in the full listing; there is no single-row read
    pub fn find(&self, id: i64) -> Option<Service> {
        self.service_repo.fetch_all().into_iter().find(|s| s.id == id)
    }

    pub fn edit(&self, id: i64, patch: ServicePatch) -> AppResult<MutationOutcome> {
        let Some(mut service) = self.find(id) else {
            return Ok(MutationOutcome::NotFound);
        };

        service.apply(patch);
        validate_service(&service.nombre, service.precio).map_err(AppError::Domain)?;

        Ok(self
            .service_repo
            .edit(self.acting_user, service.id, &service.nombre, service.precio))
    }

    pub fn remove(&self, id: i64) -> MutationOutcome {
        self.service_repo.delete(self.acting_user, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockServiceRepository;
    use mockall::predicate::eq;

    fn spa() -> Service {
        Service {
            id: 5,
            nombre: "Spa".to_string(),
            precio: 30.0,
        }
    }

    #[test]
    fn test_register_passes_acting_user() {
        let mut repo = MockServiceRepository::new();
        repo.expect_create()
            .with(eq(9), eq("Spa"), eq(30.0))
            .times(1)
            .returning(|_, _, _| MutationOutcome::Applied { rows: 1 });

        let catalog = ServiceCatalog::new(Arc::new(repo), 9);
        assert_eq!(catalog.acting_user(), 9);
        assert!(catalog.register("Spa", 30.0).unwrap().is_success());
    }

    #[test]
    fn test_register_invalid_is_rejected_locally() {
        let mut repo = MockServiceRepository::new();
        repo.expect_create().never();

        let catalog = ServiceCatalog::new(Arc::new(repo), 1);
        assert!(matches!(catalog.register("  ", 30.0), Err(AppError::Domain(_))));
    }

    #[test]
    fn test_edit_keeps_unchanged_fields() {
        let mut repo = MockServiceRepository::new();
        repo.expect_fetch_all().returning(|| vec![spa()]);
        repo.expect_edit()
            .with(eq(1), eq(5), eq("Spa"), eq(45.0))
            .times(1)
            .returning(|_, _, _, _| MutationOutcome::Applied { rows: 1 });

        let catalog = ServiceCatalog::new(Arc::new(repo), 1);
        let patch = ServicePatch {
            precio: Some(45.0),
            ..Default::default()
        };
        assert!(catalog.edit(5, patch).unwrap().is_success());
    }

    #[test]
    fn test_edit_unknown_id_is_not_found() {
        let mut repo = MockServiceRepository::new();
        repo.expect_fetch_all().returning(|| vec![spa()]);
        repo.expect_edit().never();

        let catalog = ServiceCatalog::new(Arc::new(repo), 1);
        assert_eq!(
            catalog.edit(6, ServicePatch::default()).unwrap(),
            MutationOutcome::NotFound
        );
    }

    #[test]
    fn test_remove_forwards_outcome() {
        let mut repo = MockServiceRepository::new();
        repo.expect_delete()
            .with(eq(1), eq(5))
            .returning(|_, _| MutationOutcome::StoreFault("down".to_string()));

        let catalog = ServiceCatalog::new(Arc::new(repo), 1);
        assert!(matches!(catalog.remove(5), MutationOutcome::StoreFault(_)));
    }
}
