use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};

use crate::shared::core::errors::{DomainError, ErrorBody};

/// Renders a classified failure as a status-coded response. This is the only
/// place a taxonomy kind meets a status code.
pub fn error_response(error: DomainError) -> Response {
    let status = match &error {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) | DomainError::OwnershipMismatch(_) => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if let DomainError::Unexpected(message) = &error {
        tracing::warn!(%message, "request failed outside the domain taxonomy");
    }
    (status, Json(ErrorBody::of(&error))).into_response()
}
