//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use scribe_core::error::{DomainError, RepoError};
use scribe_core::ports::GenerationError;
use scribe_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Validation(Vec<String>),
    BadGateway(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::BadGateway(msg) => write!(f, "Upstream failure: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Conflict(detail) => ErrorResponse::new(409, "Conflict").with_detail(detail),
            AppError::Validation(errors) => ErrorResponse::unprocessable(errors.join(", ")),
            AppError::BadGateway(detail) => ErrorResponse::bad_gateway(detail),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(vec![msg]),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => AppError::Conflict(msg),
        }
    }
}

// Provider details stay in the logs; callers get a generic failure.
impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        tracing::error!(error = %err, "Content generation failed");
        AppError::BadGateway(
            "Failed to generate content. Please check your API key and try again.".to_string(),
        )
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_validation_maps_to_422() {
        let err = AppError::from(DomainError::Validation("Topic is required".to_string()));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_duplicate_username_maps_to_409() {
        let err = AppError::from(RepoError::Constraint("username taken".to_string()));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_generation_failure_hides_provider_detail() {
        let err = AppError::from(GenerationError::Provider {
            status: 401,
            body: "invalid api key sk-123".to_string(),
        });

        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert!(!err.to_string().contains("sk-123"));
    }
}
