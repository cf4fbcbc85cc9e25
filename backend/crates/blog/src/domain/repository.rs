//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer. Every entity shares the same `save` contract:
//! a draft without an identifier inserts, a draft with one updates.

use crate::domain::entity::{
    comment::{Comment, CommentDraft},
    post::{Post, PostDraft},
    user::{User, UserDraft},
};
use crate::error::BlogResult;
use kernel::id::{CommentId, PostId, UserId};

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert or update, depending on whether the draft binds an id
    async fn save(&self, draft: &UserDraft) -> BlogResult<User>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> BlogResult<Option<User>>;

    /// Every user row, unfiltered
    async fn list_all(&self) -> BlogResult<Vec<User>>;
}

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Insert or update, depending on whether the draft binds an id
    async fn save(&self, draft: &PostDraft) -> BlogResult<Post>;

    /// Find a post by ID (relations loaded separately)
    async fn find_by_id(&self, id: &PostId) -> BlogResult<Option<Post>>;

    /// Every post row, unfiltered and unpaginated
    async fn list_all(&self) -> BlogResult<Vec<Post>>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Insert or update, depending on whether the draft binds an id
    async fn save(&self, draft: &CommentDraft) -> BlogResult<Comment>;

    /// Find a comment by ID
    async fn find_by_id(&self, id: &CommentId) -> BlogResult<Option<Comment>>;

    /// Every comment row, unfiltered
    async fn list_all(&self) -> BlogResult<Vec<Comment>>;
}

/// Relation loading capability for posts
///
/// Implemented per store, so a post fetch can eagerly include its
/// author and comments without the entity knowing how they are stored.
#[trait_variant::make(PostRelationLoader: Send)]
pub trait LocalPostRelationLoader {
    /// Resolve the author referenced by the post
    async fn with_author(&self, post: &Post) -> BlogResult<User>;

    /// All comments whose post reference equals this post's id
    async fn with_comments(&self, post: &Post) -> BlogResult<Vec<Comment>>;
}
