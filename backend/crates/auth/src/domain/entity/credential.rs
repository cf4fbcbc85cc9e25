//! Credential Entity
//!
//! The credential view of a user row: everything the verifier needs and
//! nothing else. The full user record lives in the blog domain.

use kernel::id::UserId;
use platform::password::HashedPassword;

/// Stored credentials for one user
#[derive(Debug, Clone)]
pub struct Credential {
    /// Owning user
    pub user_id: UserId,
    /// Login name (unique at the store level)
    pub username: String,
    /// Argon2id PHC string; only comparable through `verify`
    pub password_hash: HashedPassword,
}
