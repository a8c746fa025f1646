//! Error handling - maps every failure to a status code and JSON body.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::ValidationErrors;
use blog_core::error::{DomainError, RepoError};
use blog_shared::ErrorResponse;

/// Application-level error type.
///
/// Validation failures become 422 with a `{field: message}` body, missing
/// resources 404 with a message string, and everything else 500 with
/// `"Internal Server Error: {message}"`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Build the error used for a request that could not be extracted
    /// (bad path segment, query string or body).
    pub fn extraction(err: impl fmt::Display) -> actix_web::Error {
        AppError::Internal(err.to_string()).into()
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Validation(errors) => {
                tracing::debug!("Validation failed: {}", errors);
                ErrorResponse::fields(errors.clone().into_inner())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error(detail)
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Validation(errors) => AppError::Validation(errors),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal(msg)
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
