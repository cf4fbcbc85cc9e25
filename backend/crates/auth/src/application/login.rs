//! Login Use Case
//!
//! Authenticates a username/password pair against the credential store
//! and creates a session on success.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::generate_session_token;
use crate::domain::entity::{identity::Identity, session::AuthSession};
use crate::domain::repository::{CredentialStore, SessionRepository};
use crate::error::{AuthError, AuthResult};
use platform::password::RawPassword;

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed session token for the cookie
    pub session_token: String,
    /// The authenticated identity
    pub identity: Identity,
}

/// Login use case
pub struct LoginUseCase<C, S>
where
    C: CredentialStore,
    S: SessionRepository,
{
    credentials: Arc<C>,
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<C, S> LoginUseCase<C, S>
where
    C: CredentialStore,
    S: SessionRepository,
{
    pub fn new(credentials: Arc<C>, sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            credentials,
            sessions,
            config,
        }
    }

    /// Verify credentials and open a session
    ///
    /// Unknown-user and wrong-password failures carry distinct variants
    /// for logging, but the caller maps both onto one client outcome.
    /// Store errors propagate: authentication fails closed.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let credential = self
            .credentials
            .find_by_username(&input.username)
            .await?
            .ok_or(AuthError::UnknownUser)?;

        let candidate =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !credential.password_hash.verify(&candidate)? {
            return Err(AuthError::InvalidCredentials);
        }

        let ttl = chrono::Duration::from_std(self.config.session_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;

        let session = AuthSession::new(credential.user_id, ttl);
        self.sessions.create(&session).await?;

        let session_token = generate_session_token(&self.config.session_secret, session.session_id);

        tracing::info!(
            user_id = %credential.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token,
            identity: Identity {
                user_id: credential.user_id,
                username: credential.username,
            },
        })
    }
}
