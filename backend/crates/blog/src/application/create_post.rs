//! Create Post Use Case

use std::sync::Arc;

use crate::domain::entity::post::{Post, PostDraft};
use crate::domain::repository::PostRepository;
use crate::error::BlogResult;
use kernel::id::{PostId, UserId};

/// Create post input
pub struct CreatePostInput {
    /// Bound id turns the save into an update
    pub id: Option<PostId>,
    pub author: UserId,
    pub title: String,
    pub body: String,
}

/// Create post use case
///
/// The author reference is enforced by the store's foreign key; a
/// dangling reference surfaces as a store error.
pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    posts: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    pub async fn execute(&self, input: CreatePostInput) -> BlogResult<Post> {
        let draft = PostDraft {
            id: input.id,
            author: input.author,
            title: input.title,
            body: input.body,
        };

        let post = self.posts.save(&draft).await?;

        tracing::info!(post_id = %post.id, author = %post.author, "Post saved");

        Ok(post)
    }
}
