// src/application/error_handling.rs
//
// Outcome and error messages for the console
//
// ARCHITECTURE:
// - Maps outcomes and internal errors → short user-facing messages
// - Never exposes store internals on screen; details go to the log
// - A data-access failure never ends the session

use crate::error::AppError;
use crate::repositories::MutationOutcome;

/// The mutation the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddRoom,
    UpdateRoom,
    DeleteRoom,
    AddService,
    EditService,
    DeleteService,
}

impl Action {
    fn success(self) -> &'static str {
        match self {
            Action::AddRoom => "¡Habitación agregada con éxito!",
            Action::UpdateRoom => "¡Habitación actualizada con éxito!",
            Action::DeleteRoom => "¡Habitación eliminada con éxito!",
            Action::AddService => "¡Servicio agregado con éxito!",
            Action::EditService => "¡Servicio editado con éxito!",
            Action::DeleteService => "¡Servicio eliminado con éxito!",
        }
    }

    fn not_found(self) -> &'static str {
        match self {
            Action::AddRoom | Action::UpdateRoom | Action::DeleteRoom => {
                "No se encontró ninguna habitación con ese ID."
            }
            Action::AddService | Action::EditService | Action::DeleteService => {
                "No se encontró ningún servicio con ese ID."
            }
        }
    }

    fn conflict(self) -> &'static str {
        match self {
            Action::AddRoom => "Error: Ya existe una habitación con ese ID.",
            Action::UpdateRoom | Action::DeleteRoom => {
                "Error: La base de datos rechazó el cambio de la habitación."
            }
            Action::AddService | Action::EditService | Action::DeleteService => {
                "Error: La base de datos rechazó el cambio del servicio."
            }
        }
    }

    fn fault(self) -> &'static str {
        match self {
            Action::AddRoom => "Error al agregar habitación.",
            Action::UpdateRoom => "Error al actualizar habitación.",
            Action::DeleteRoom => "Error al eliminar habitación.",
            Action::AddService => "Error al agregar servicio.",
            Action::EditService => "Error al editar servicio.",
            Action::DeleteService => "Error al eliminar servicio.",
        }
    }
}

/// Message shown after a mutation
pub fn outcome_message(action: Action, outcome: &MutationOutcome) -> String {
    match outcome {
        MutationOutcome::Applied { .. } => action.success().to_string(),
        MutationOutcome::NotFound => action.not_found().to_string(),
        MutationOutcome::Conflict(detail) => {
            log::warn!("{:?} refused: {}", action, detail);
            action.conflict().to_string()
        }
        MutationOutcome::StoreFault(detail) => {
            log::error!("{:?} failed: {}", action, detail);
            format!("{} Intente nuevamente más tarde.", action.fault())
        }
    }
}

/// Message shown when an operation failed before reaching the store
pub fn error_message(action: Action, error: &AppError) -> String {
    match error {
        AppError::Domain(domain_error) => format!("Datos inválidos: {}", domain_error),
        AppError::NotFound => action.not_found().to_string(),
        other => {
            log::error!("{:?} failed: {}", action, other);
            action.fault().to_string()
        }
    }
}
