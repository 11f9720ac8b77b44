//! Error handling - every failure becomes a `{"error": "..."}` JSON body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use quill_core::DomainError;
use quill_shared::ErrorResponse;

/// Largest accepted JSON request body.
pub const JSON_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                tracing::debug!(entity_type, id = %id, "Entity not found");
                AppError::NotFound(format!("{entity_type} not found"))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Storage(source) => {
                tracing::error!(error = %source, "Storage failure");
                AppError::Internal("Internal server error".to_string())
            }
        }
    }
}

/// Attach an operation-specific message to storage failures.
pub trait StorageContext<T> {
    fn context(self, message: &'static str) -> AppResult<T>;
}

impl<T> StorageContext<T> for Result<T, DomainError> {
    fn context(self, message: &'static str) -> AppResult<T> {
        self.map_err(|err| match err {
            DomainError::Storage(source) => {
                tracing::error!(error = %source, "{message}");
                AppError::Internal(message.to_string())
            }
            other => other.into(),
        })
    }
}

/// JSON extractor configuration: size limit and `{error}` bodies for bad payloads.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| AppError::BadRequest(format!("Invalid JSON body: {err}")).into())
}

/// Query extractor configuration with `{error}` bodies for bad query strings.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(format!("Invalid query: {err}")).into())
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
