use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::shared::core::validation::Violation;

/// Classified domain failures. The core only classifies; turning a kind into
/// a protocol status code is the transport boundary's job.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("validation failed")]
    Validation(Vec<Violation>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    OwnershipMismatch(String),

    #[error("{0}")]
    Conflict(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl DomainError {
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "VALIDATION_FAILED",
            DomainError::NotFound(_) => "NOT_FOUND",
            DomainError::OwnershipMismatch(_) => "OWNERSHIP_MISMATCH",
            DomainError::Conflict(_) => "CONFLICT",
            DomainError::Unexpected(_) => "UNEXPECTED",
        }
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            DomainError::Validation(violations) => violations,
            _ => &[],
        }
    }
}

/// The stable failure shape handed to the transport boundary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub summary: String,
    pub timestamp: DateTime<Utc>,
    pub code: &'static str,
    pub details: Vec<Violation>,
}

impl ErrorBody {
    pub fn of(error: &DomainError) -> Self {
        Self {
            summary: error.to_string(),
            timestamp: Utc::now(),
            code: error.code(),
            details: error.violations().to_vec(),
        }
    }
}
