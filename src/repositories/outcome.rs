// src/repositories/outcome.rs

use serde::Serialize;

/// Result of a mutation, as seen from outside the repository.
///
/// Replaces the bare success flag so callers can tell a missing row from a
/// failing store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum MutationOutcome {
    /// Committed. `rows` is the affected-row count reported by the store.
    Applied { rows: usize },

    /// Nothing matched the identifier; rolled back.
    NotFound,

    /// The store refused the change (duplicate key, constraint); rolled back.
    Conflict(String),

    /// Connection failure or any other store error; rolled back.
    StoreFault(String),
}

impl MutationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MutationOutcome::Applied { .. })
    }
}

impl std::fmt::Display for MutationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationOutcome::Applied { rows } => write!(f, "applied ({} rows)", rows),
            MutationOutcome::NotFound => write!(f, "not found"),
            MutationOutcome::Conflict(detail) => write!(f, "conflict: {}", detail),
            MutationOutcome::StoreFault(detail) => write!(f, "store fault: {}", detail),
        }
    }
}
