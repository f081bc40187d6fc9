//! Shared API error envelope.
//!
//! Every failing endpoint answers with the `{code, message}` JSON body
//! so clients never have to parse free-form strings.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Serialize;

use crate::domain::foundation::ValidationError;
use crate::domain::planner::PlannerError;

/// JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        match err {
            PlannerError::ExpenseNotFound(_)
            | PlannerError::GuestNotFound(_)
            | PlannerError::ShowcaseItemNotFound(_) => ApiError::NotFound(err.to_string()),
            PlannerError::SeededExpense(_) | PlannerError::AlreadyAdded(_) => {
                ApiError::Conflict(err.to_string())
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL", msg),
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ExpenseId, ShowcaseItemId};

    #[test]
    fn planner_misses_map_to_404() {
        let err: ApiError = PlannerError::ExpenseNotFound(ExpenseId::new()).into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn seeded_removal_maps_to_409() {
        let err: ApiError = PlannerError::SeededExpense(ExpenseId::new()).into();
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn repeat_showcase_add_maps_to_409() {
        let id = ShowcaseItemId::new("s2").unwrap();
        let err: ApiError = PlannerError::AlreadyAdded(id).into();
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_errors_map_to_400() {
        let err: ApiError = ValidationError::empty_field("name").into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
