//! PostgreSQL Repository Implementations
//!
//! Identifier and timestamp assignment stay inside the database:
//! inserts rely on column defaults and every statement returns the
//! persisted row.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    comment::{Comment, CommentDraft},
    post::{Post, PostDraft},
    user::{User, UserDraft},
};
use crate::domain::repository::{
    CommentRepository, PostRelationLoader, PostRepository, UserRepository,
};
use crate::error::{BlogError, BlogResult};
use kernel::id::{CommentId, PostId, UserId};

/// PostgreSQL-backed blog repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgBlogRepository {
    async fn save(&self, draft: &UserDraft) -> BlogResult<User> {
        let row = match draft.id {
            None => {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    INSERT INTO users (username, password_hash)
                    VALUES ($1, $2)
                    RETURNING id, username, password_hash, created_at, updated_at
                    "#,
                )
                .bind(&draft.username)
                .bind(&draft.password_hash)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    UPDATE users SET
                        username = $2,
                        password_hash = $3,
                        updated_at = now()
                    WHERE id = $1
                    RETURNING id, username, password_hash, created_at, updated_at
                    "#,
                )
                .bind(id.as_uuid())
                .bind(&draft.username)
                .bind(&draft.password_hash)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(row.into_user())
    }

    async fn find_by_id(&self, id: &UserId) -> BlogResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn list_all(&self) -> BlogResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_user()).collect())
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgBlogRepository {
    async fn save(&self, draft: &PostDraft) -> BlogResult<Post> {
        let row = match draft.id {
            None => {
                sqlx::query_as::<_, PostRow>(
                    r#"
                    INSERT INTO posts (author, title, body)
                    VALUES ($1, $2, $3)
                    RETURNING id, author, title, body, created_at, updated_at
                    "#,
                )
                .bind(draft.author.as_uuid())
                .bind(&draft.title)
                .bind(&draft.body)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, PostRow>(
                    r#"
                    UPDATE posts SET
                        author = $2,
                        title = $3,
                        body = $4,
                        updated_at = now()
                    WHERE id = $1
                    RETURNING id, author, title, body, created_at, updated_at
                    "#,
                )
                .bind(id.as_uuid())
                .bind(draft.author.as_uuid())
                .bind(&draft.title)
                .bind(&draft.body)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(row.into_post())
    }

    async fn find_by_id(&self, id: &PostId) -> BlogResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, author, title, body, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_post()))
    }

    async fn list_all(&self) -> BlogResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, author, title, body, created_at, updated_at
            FROM posts
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_post()).collect())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgBlogRepository {
    async fn save(&self, draft: &CommentDraft) -> BlogResult<Comment> {
        let row = match draft.id {
            None => {
                sqlx::query_as::<_, CommentRow>(
                    r#"
                    INSERT INTO comments (user_id, post_id, body)
                    VALUES ($1, $2, $3)
                    RETURNING id, user_id, post_id, body, created_at, updated_at
                    "#,
                )
                .bind(draft.user_id.as_uuid())
                .bind(draft.post_id.as_uuid())
                .bind(&draft.body)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, CommentRow>(
                    r#"
                    UPDATE comments SET
                        user_id = $2,
                        post_id = $3,
                        body = $4,
                        updated_at = now()
                    WHERE id = $1
                    RETURNING id, user_id, post_id, body, created_at, updated_at
                    "#,
                )
                .bind(id.as_uuid())
                .bind(draft.user_id.as_uuid())
                .bind(draft.post_id.as_uuid())
                .bind(&draft.body)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(row.into_comment())
    }

    async fn find_by_id(&self, id: &CommentId) -> BlogResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, user_id, post_id, body, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_comment()))
    }

    async fn list_all(&self) -> BlogResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, user_id, post_id, body, created_at, updated_at
            FROM comments
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_comment()).collect())
    }
}

// ============================================================================
// Post Relation Loader Implementation
// ============================================================================

impl PostRelationLoader for PgBlogRepository {
    async fn with_author(&self, post: &Post) -> BlogResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(post.author.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        // The foreign key guarantees the author row; a miss here is an
        // integrity fault, not a client 404
        row.map(|r| r.into_user())
            .ok_or_else(|| BlogError::Internal(format!("Author missing for post {}", post.id)))
    }

    async fn with_comments(&self, post: &Post) -> BlogResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, user_id, post_id, body, created_at, updated_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(post.id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_comment()).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::from_uuid(self.id),
            username: self.username,
            password_hash: self.password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    author: Uuid,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::from_uuid(self.id),
            author: UserId::from_uuid(self.author),
            title: self.title,
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    user_id: Uuid,
    post_id: Uuid,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: CommentId::from_uuid(self.id),
            user_id: UserId::from_uuid(self.user_id),
            post_id: PostId::from_uuid(self.post_id),
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
