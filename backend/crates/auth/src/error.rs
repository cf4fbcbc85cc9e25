//! Auth Error Types
//!
//! Authentication failures never reach the client as raw status codes:
//! the presentation layer logs them and answers with a redirect to the
//! login page. The variants below exist for server-side logs and for
//! the gate's allow/deny decision.

use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user with the submitted username
    ///
    /// Must stay indistinguishable from [`AuthError::InvalidCredentials`]
    /// outside the process; only logs may tell them apart.
    #[error("Unknown user")]
    UnknownUser,

    /// Wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session token missing, malformed, expired, or referencing a
    /// user that no longer exists
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Whether the failure is a credential rejection (as opposed to an
    /// infrastructure fault). Credential rejections share one client
    /// outcome regardless of variant.
    pub fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            AuthError::UnknownUser | AuthError::InvalidCredentials
        )
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UnknownUser | AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::SessionInvalid => {
                tracing::debug!("Request without a valid session");
            }
        }
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
