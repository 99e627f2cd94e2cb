use crate::domain::room::invariants::validate_precio;
use crate::domain::{DomainError, DomainResult};

/// Validates the values a service is registered or edited with
pub fn validate_service(nombre: &str, precio: f64) -> DomainResult<()> {
    if nombre.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Service name cannot be empty".to_string(),
        ));
    }
    validate_precio(precio)
}
