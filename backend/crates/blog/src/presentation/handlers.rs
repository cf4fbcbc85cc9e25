//! HTTP Handlers
//!
//! All handlers run behind the auth gate; they see only authenticated
//! requests. Errors map through [`BlogError`]'s response impl: 400 for
//! payload problems, 404 for misses, opaque 500 for store errors.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreateCommentInput, CreateCommentUseCase, CreatePostInput, CreatePostUseCase, CreateUserInput,
    CreateUserUseCase, FetchPostUseCase, FetchUserUseCase, ListPostsUseCase,
};
use crate::domain::repository::{
    CommentRepository, PostRelationLoader, PostRepository, UserRepository,
};
use crate::error::BlogError;
use crate::presentation::dto::{
    PostDetailResponse, PostResponse, SaveCommentRequest, SavePostRequest, SaveUserRequest,
    SavedResponse, UserResponse,
};
use crate::presentation::payload::parse_payload;
use kernel::id::{CommentId, PostId, UserId};

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R>
where
    R: UserRepository
        + PostRepository
        + CommentRepository
        + PostRelationLoader
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Users
// ============================================================================

/// GET /user/{id}
pub async fn get_user<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, BlogError>
where
    R: UserRepository
        + PostRepository
        + CommentRepository
        + PostRelationLoader
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = FetchUserUseCase::new(state.repo.clone());

    let user = use_case.execute(&UserId::from_uuid(id)).await?;

    Ok(Json(user.into()))
}

/// POST /user
pub async fn save_user<R>(
    State(state): State<BlogAppState<R>>,
    Json(payload): Json<Value>,
) -> Result<Json<SavedResponse>, BlogError>
where
    R: UserRepository
        + PostRepository
        + CommentRepository
        + PostRelationLoader
        + Clone
        + Send
        + Sync
        + 'static,
{
    let req: SaveUserRequest = parse_payload(payload)?;

    let use_case = CreateUserUseCase::new(state.repo.clone());

    let user = use_case
        .execute(CreateUserInput {
            id: req.id.map(UserId::from_uuid),
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(SavedResponse {
        id: user.id.into_uuid(),
    }))
}

// ============================================================================
// Posts
// ============================================================================

/// GET /posts
pub async fn list_posts<R>(
    State(state): State<BlogAppState<R>>,
) -> Result<Json<Vec<PostResponse>>, BlogError>
where
    R: UserRepository
        + PostRepository
        + CommentRepository
        + PostRelationLoader
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());

    let posts = use_case.execute().await?;

    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// GET /post/{id}
pub async fn get_post<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostDetailResponse>, BlogError>
where
    R: UserRepository
        + PostRepository
        + CommentRepository
        + PostRelationLoader
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = FetchPostUseCase::new(state.repo.clone());

    let loaded = use_case.execute(&PostId::from_uuid(id)).await?;

    Ok(Json(loaded.into()))
}

/// POST /post
pub async fn save_post<R>(
    State(state): State<BlogAppState<R>>,
    Json(payload): Json<Value>,
) -> Result<Json<SavedResponse>, BlogError>
where
    R: UserRepository
        + PostRepository
        + CommentRepository
        + PostRelationLoader
        + Clone
        + Send
        + Sync
        + 'static,
{
    let req: SavePostRequest = parse_payload(payload)?;

    let use_case = CreatePostUseCase::new(state.repo.clone());

    let post = use_case
        .execute(CreatePostInput {
            id: req.id.map(PostId::from_uuid),
            author: UserId::from_uuid(req.author),
            title: req.title,
            body: req.body,
        })
        .await?;

    Ok(Json(SavedResponse {
        id: post.id.into_uuid(),
    }))
}

// ============================================================================
// Comments
// ============================================================================

/// POST /comment
pub async fn save_comment<R>(
    State(state): State<BlogAppState<R>>,
    Json(payload): Json<Value>,
) -> Result<Json<SavedResponse>, BlogError>
where
    R: UserRepository
        + PostRepository
        + CommentRepository
        + PostRelationLoader
        + Clone
        + Send
        + Sync
        + 'static,
{
    let req: SaveCommentRequest = parse_payload(payload)?;

    let use_case = CreateCommentUseCase::new(state.repo.clone());

    let comment = use_case
        .execute(CreateCommentInput {
            id: req.id.map(CommentId::from_uuid),
            user_id: UserId::from_uuid(req.user_id),
            post_id: PostId::from_uuid(req.post_id),
            body: req.body,
        })
        .await?;

    Ok(Json(SavedResponse {
        id: comment.id.into_uuid(),
    }))
}
