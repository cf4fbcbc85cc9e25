//! Identity Entity
//!
//! The authenticated representation of a user. Inserted into request
//! extensions by the gate middleware once a session checks out.

use kernel::id::UserId;

/// Authenticated identity
#[derive(Debug, Clone)]
pub struct Identity {
    /// The user's identifier
    pub user_id: UserId,
    /// Login name, re-fetched from the store on each session check
    pub username: String,
}
