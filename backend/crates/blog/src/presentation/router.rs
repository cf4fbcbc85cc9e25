//! Blog Router
//!
//! The auth gate is layered on top of this router by the binary; every
//! route here assumes an authenticated request.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::{
    CommentRepository, PostRelationLoader, PostRepository, UserRepository,
};
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the blog router with PostgreSQL repository
pub fn blog_router(repo: PgBlogRepository) -> Router {
    blog_router_generic(repo)
}

/// Create a generic blog router for any repository implementation
pub fn blog_router_generic<R>(repo: R) -> Router
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
    let state = BlogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/user/{id}", get(handlers::get_user::<R>))
        .route("/user", post(handlers::save_user::<R>))
        .route("/posts", get(handlers::list_posts::<R>))
        .route("/post/{id}", get(handlers::get_post::<R>))
        .route("/post", post(handlers::save_post::<R>))
        .route("/comment", post(handlers::save_comment::<R>))
        .with_state(state)
}
