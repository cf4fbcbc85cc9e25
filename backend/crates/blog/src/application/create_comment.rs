//! Create Comment Use Case

use std::sync::Arc;

use crate::domain::entity::comment::{Comment, CommentDraft};
use crate::domain::repository::CommentRepository;
use crate::error::BlogResult;
use kernel::id::{CommentId, PostId, UserId};

/// Create comment input
pub struct CreateCommentInput {
    /// Bound id turns the save into an update
    pub id: Option<CommentId>,
    pub user_id: UserId,
    pub post_id: PostId,
    pub body: String,
}

/// Create comment use case
///
/// Both references are enforced by the store's foreign keys.
pub struct CreateCommentUseCase<C>
where
    C: CommentRepository,
{
    comments: Arc<C>,
}

impl<C> CreateCommentUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comments: Arc<C>) -> Self {
        Self { comments }
    }

    pub async fn execute(&self, input: CreateCommentInput) -> BlogResult<Comment> {
        let draft = CommentDraft {
            id: input.id,
            user_id: input.user_id,
            post_id: input.post_id,
            body: input.body,
        };

        let comment = self.comments.save(&draft).await?;

        tracing::info!(
            comment_id = %comment.id,
            post_id = %comment.post_id,
            "Comment saved"
        );

        Ok(comment)
    }
}
