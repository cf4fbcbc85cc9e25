//! Fetch Post Use Case
//!
//! Post fetch is the one read that eagerly includes relations: the
//! author and every comment on the post.

use std::sync::Arc;

use crate::domain::entity::{comment::Comment, post::Post, user::User};
use crate::domain::repository::{PostRelationLoader, PostRepository};
use crate::error::{BlogError, BlogResult};
use kernel::id::PostId;

/// A post with its relations loaded
#[derive(Debug, Clone)]
pub struct PostWithRelations {
    pub post: Post,
    pub author: User,
    pub comments: Vec<Comment>,
}

/// Fetch post use case
pub struct FetchPostUseCase<P>
where
    P: PostRepository + PostRelationLoader,
{
    posts: Arc<P>,
}

impl<P> FetchPostUseCase<P>
where
    P: PostRepository + PostRelationLoader,
{
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    pub async fn execute(&self, id: &PostId) -> BlogResult<PostWithRelations> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(BlogError::NotFound)?;

        let author = self.posts.with_author(&post).await?;
        let comments = self.posts.with_comments(&post).await?;

        Ok(PostWithRelations {
            post,
            author,
            comments,
        })
    }
}
