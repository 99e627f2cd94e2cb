use super::entity::Room;
use crate::domain::{DomainError, DomainResult};

/// Validates all Room invariants
pub fn validate_room(room: &Room) -> DomainResult<()> {
    validate_id(&room.id)?;
    validate_precio(room.precio)?;
    Ok(())
}

/// Identifier cannot be blank
fn validate_id(id: &str) -> DomainResult<()> {
    if id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Room id cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Price must be a finite, non-negative amount
pub(crate) fn validate_precio(precio: f64) -> DomainResult<()> {
    if !precio.is_finite() || precio < 0.0 {
        return Err(DomainError::InvariantViolation(format!(
            "Price must be a non-negative amount, got {}",
            precio
        )));
    }
    Ok(())
}

/// Room invariants:
///
/// 1. Identifier is user supplied and never changes after insert
/// 2. Identifier is unique across rooms (pre-check plus primary key)
/// 3. Bed and bathroom counts are unsigned
/// 4. Price is non-negative
/// 5. Unspecified fields keep their value on update

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str, precio: f64) -> Room {
        Room {
            id: id.to_string(),
            descripcion: "Doble".to_string(),
            camas: 2,
            banos: 1,
            vista: "ciudad".to_string(),
            balcon: false,
            precio,
            disponible: true,
            lugar_turistico: "Centro".to_string(),
        }
    }

    #[test]
    fn test_valid_room() {
        assert!(validate_room(&room("101", 80.0)).is_ok());
        assert!(validate_room(&room("102", 0.0)).is_ok());
    }

    #[test]
    fn test_blank_id_fails() {
        assert!(validate_room(&room("  ", 80.0)).is_err());
    }

    #[test]
    fn test_negative_or_nan_price_fails() {
        assert!(validate_room(&room("101", -1.0)).is_err());
        assert!(validate_room(&room("101", f64::NAN)).is_err());
    }
}
