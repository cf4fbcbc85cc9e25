//! Check Session Use Case
//!
//! Reconstitutes an identity from a session token: verify the token
//! signature, load the session row, then re-fetch the user the session
//! references. A session whose user is gone counts as no session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::entity::{identity::Identity, session::AuthSession};
use crate::domain::repository::{CredentialStore, SessionRepository};
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<C, S>
where
    C: CredentialStore,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    credentials: Arc<C>,
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<C, S> CheckSessionUseCase<C, S>
where
    C: CredentialStore,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(credentials: Arc<C>, sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            credentials,
            sessions,
            config,
        }
    }

    /// Resolve the identity behind a session token
    ///
    /// The round trip guarantee: the returned identity carries the same
    /// user id that was serialized into the session at login, as long
    /// as the user record still exists.
    pub async fn identity(&self, session_token: &str) -> AuthResult<Identity> {
        let session = self.get_session(session_token).await?;

        self.credentials
            .find_identity_by_id(&session.user_id)
            .await?
            .ok_or(AuthError::SessionInvalid)
    }

    /// Get the session and update its last activity
    async fn get_session(&self, session_token: &str) -> AuthResult<AuthSession> {
        let session_id = parse_session_token(&self.config.session_secret, session_token)?;

        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.sessions.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        let mut session = session;
        session.touch();

        // Update in background; a failed touch must not fail the request
        let session_clone = session.clone();
        let repo = self.sessions.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.update(&session_clone).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(session)
    }
}
