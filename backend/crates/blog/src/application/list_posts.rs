//! List Posts Use Case
//!
//! Returns every post row, unfiltered and unpaginated.

use std::sync::Arc;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::BlogResult;

/// List posts use case
pub struct ListPostsUseCase<P>
where
    P: PostRepository,
{
    posts: Arc<P>,
}

impl<P> ListPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    pub async fn execute(&self) -> BlogResult<Vec<Post>> {
        self.posts.list_all().await
    }
}
