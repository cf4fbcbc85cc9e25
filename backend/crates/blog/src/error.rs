//! Blog Error Types
//!
//! Classified into the unified `kernel` error at the response boundary.
//! Store errors are logged server-side with their full detail and reach
//! the client as an opaque 500.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Request body is empty or carries no fields
    #[error("Request body is empty")]
    EmptyPayload,

    /// Request body does not parse into the expected fields
    #[error("Request body is malformed: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Field value rejected before it could reach the store
    #[error("Invalid field value: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::EmptyPayload
            | BlogError::MalformedPayload(_)
            | BlogError::Validation(_) => ErrorKind::BadRequest,
            BlogError::NotFound => ErrorKind::NotFound,
            BlogError::Database(_) | BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server errors get a fixed message; their detail stays in the
    /// server-side logs.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Internal server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Blog request error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<platform::password::PasswordHashError> for BlogError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        BlogError::Internal(err.to_string())
    }
}

impl From<platform::password::PasswordPolicyError> for BlogError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        BlogError::Validation(err.to_string())
    }
}
