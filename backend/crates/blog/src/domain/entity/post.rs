//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

/// Post draft: what the application hands to `save`
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub id: Option<PostId>,
    /// Author reference; must resolve to an existing user at write time
    pub author: UserId,
    pub title: String,
    pub body: String,
}

/// Persisted post record
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub author: UserId,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
