//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::{credential::Credential, identity::Identity, session::AuthSession};
use crate::error::AuthResult;
use kernel::id::UserId;
use uuid::Uuid;

/// Credential store trait
///
/// Read-only access to the user rows the verifier and the session
/// deserializer need. Writes go through the blog domain.
#[trait_variant::make(CredentialStore: Send)]
pub trait LocalCredentialStore {
    /// Find the credentials for a username, if any
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Credential>>;

    /// Re-fetch the identity for a serialized user reference
    ///
    /// Returns `None` when the user no longer exists (dangling session).
    async fn find_identity_by_id(&self, user_id: &UserId) -> AuthResult<Option<Identity>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find a session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Update a session (e.g., last activity)
    async fn update(&self, session: &AuthSession) -> AuthResult<()>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
