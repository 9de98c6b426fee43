//! Store error types.

use thiserror::Error;

/// Store operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was absent or empty
    #[error("{entity} field '{field}' is required")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// No record with the given identifier
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// Lock poisoned (RwLock poisoned)
    #[error("Lock poisoned")]
    LockPoisoned,
}
