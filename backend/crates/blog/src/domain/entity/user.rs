//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

/// User draft: what the application hands to `save`
///
/// A bound `id` turns the save into an update of that row.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub id: Option<UserId>,
    /// Login name (unique at the store level)
    pub username: String,
    /// Argon2id PHC string; hashing happens before the draft is built
    pub password_hash: String,
}

/// Persisted user record
///
/// Identifier and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Never serialized to clients
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
