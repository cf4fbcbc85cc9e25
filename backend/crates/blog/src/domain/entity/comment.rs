//! Comment Entity

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};

/// Comment draft: what the application hands to `save`
#[derive(Debug, Clone)]
pub struct CommentDraft {
    pub id: Option<CommentId>,
    pub user_id: UserId,
    pub post_id: PostId,
    pub body: String,
}

/// Persisted comment record
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub post_id: PostId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
