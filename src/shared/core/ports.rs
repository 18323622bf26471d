use thiserror::Error;

use crate::shared::core::errors::DomainError;

/// Failure surface shared by both repository ports. Uniqueness lives in the
/// store's constraint system, not in the core; the core only translates the
/// typed violation into a `Conflict`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{field} already registered")]
    UniqueViolation { field: &'static str },

    #[error("storage backend failed: {0}")]
    Backend(String),
}

impl From<RepositoryError> for DomainError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::UniqueViolation { field } => {
                DomainError::Conflict(format!("{field} already registered"))
            }
            RepositoryError::Backend(message) => DomainError::Unexpected(message),
        }
    }
}
