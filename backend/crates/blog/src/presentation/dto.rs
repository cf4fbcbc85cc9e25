//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::fetch_post::PostWithRelations;
use crate::domain::entity::{comment::Comment, post::Post, user::User};

// ============================================================================
// Requests
// ============================================================================

/// Save user request
///
/// A payload carrying `id` updates that row instead of inserting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveUserRequest {
    pub id: Option<Uuid>,
    pub username: String,
    pub password: String,
}

/// Save post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePostRequest {
    pub id: Option<Uuid>,
    pub author: Uuid,
    pub title: String,
    pub body: String,
}

/// Save comment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCommentRequest {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub body: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Identifier of a saved entity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResponse {
    pub id: Uuid,
}

/// User response (the password hash never leaves the server)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_uuid(),
            username: user.username,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Post response (collection entries; relations not loaded)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub author: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into_uuid(),
            author: post.author.into_uuid(),
            title: post.title,
            body: post.body,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Comment response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into_uuid(),
            user_id: comment.user_id.into_uuid(),
            post_id: comment.post_id.into_uuid(),
            body: comment.body,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// Single post response with eagerly loaded relations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: UserResponse,
    pub comments: Vec<CommentResponse>,
}

impl From<PostWithRelations> for PostDetailResponse {
    fn from(loaded: PostWithRelations) -> Self {
        Self {
            id: loaded.post.id.into_uuid(),
            title: loaded.post.title,
            body: loaded.post.body,
            created_at: loaded.post.created_at,
            updated_at: loaded.post.updated_at,
            author: loaded.author.into(),
            comments: loaded.comments.into_iter().map(Into::into).collect(),
        }
    }
}
