//! Logout Use Case
//!
//! Deletes the server-side session behind a token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionRepository,
{
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { sessions, config }
    }

    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let session_id = parse_session_token(&self.config.session_secret, session_token)?;

        self.sessions.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "User logged out");

        Ok(())
    }
}
