//! Blog (Content) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits, relation loading
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Users, posts, and comments persisted through a single `save`
//!   operation (insert when no identifier is bound, update otherwise)
//! - Post fetch eagerly loads its author and comments
//! - Identifier and timestamp assignment belong to the store

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{BlogError, BlogResult};
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::{blog_router, blog_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
}
