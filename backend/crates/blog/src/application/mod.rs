//! Application Layer - Use Cases

pub mod create_comment;
pub mod create_post;
pub mod create_user;
pub mod fetch_post;
pub mod fetch_user;
pub mod list_posts;

pub use create_comment::{CreateCommentInput, CreateCommentUseCase};
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use create_user::{CreateUserInput, CreateUserUseCase};
pub use fetch_post::{FetchPostUseCase, PostWithRelations};
pub use fetch_user::FetchUserUseCase;
pub use list_posts::ListPostsUseCase;
