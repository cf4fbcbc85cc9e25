//! Unit tests for the blog crate
//!
//! Use cases, handlers, and the router are generic over the repository
//! traits, so everything here runs against an in-memory store.

use std::sync::{Arc, Mutex};

use chrono::Utc;

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

/// In-memory store; assigns ids and timestamps the way the database
/// defaults would
#[derive(Clone, Default)]
struct MemBlogRepository {
    users: Arc<Mutex<Vec<User>>>,
    posts: Arc<Mutex<Vec<Post>>>,
    comments: Arc<Mutex<Vec<Comment>>>,
    fail: Arc<Mutex<bool>>,
}

impl MemBlogRepository {
    fn break_store(&self) {
        *self.fail.lock().unwrap() = true;
    }

    fn guard(&self) -> BlogResult<()> {
        if *self.fail.lock().unwrap() {
            Err(BlogError::Database(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }

    fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    async fn seed_user(&self, username: &str) -> User {
        UserRepository::save(
            self,
            &UserDraft {
                id: None,
                username: username.to_string(),
                password_hash: "$argon2id$fake".to_string(),
            },
        )
        .await
        .unwrap()
    }

    async fn seed_post(&self, author: UserId, title: &str) -> Post {
        PostRepository::save(
            self,
            &PostDraft {
                id: None,
                author,
                title: title.to_string(),
                body: "body".to_string(),
            },
        )
        .await
        .unwrap()
    }

    async fn seed_comment(&self, user_id: UserId, post_id: PostId, body: &str) -> Comment {
        CommentRepository::save(
            self,
            &CommentDraft {
                id: None,
                user_id,
                post_id,
                body: body.to_string(),
            },
        )
        .await
        .unwrap()
    }
}

impl UserRepository for MemBlogRepository {
    async fn save(&self, draft: &UserDraft) -> BlogResult<User> {
        self.guard()?;
        let now = Utc::now();
        let mut users = self.users.lock().unwrap();

        match draft.id {
            None => {
                let user = User {
                    id: UserId::new(),
                    username: draft.username.clone(),
                    password_hash: draft.password_hash.clone(),
                    created_at: now,
                    updated_at: now,
                };
                users.push(user.clone());
                Ok(user)
            }
            Some(id) => {
                let user = users
                    .iter_mut()
                    .find(|u| u.id == id)
                    .ok_or(BlogError::Database(sqlx::Error::RowNotFound))?;
                user.username = draft.username.clone();
                user.password_hash = draft.password_hash.clone();
                user.updated_at = now;
                Ok(user.clone())
            }
        }
    }

    async fn find_by_id(&self, id: &UserId) -> BlogResult<Option<User>> {
        self.guard()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == *id)
            .cloned())
    }

    async fn list_all(&self) -> BlogResult<Vec<User>> {
        self.guard()?;
        Ok(self.users.lock().unwrap().clone())
    }
}

impl PostRepository for MemBlogRepository {
    async fn save(&self, draft: &PostDraft) -> BlogResult<Post> {
        self.guard()?;
        let now = Utc::now();
        let mut posts = self.posts.lock().unwrap();

        match draft.id {
            None => {
                let post = Post {
                    id: PostId::new(),
                    author: draft.author,
                    title: draft.title.clone(),
                    body: draft.body.clone(),
                    created_at: now,
                    updated_at: now,
                };
                posts.push(post.clone());
                Ok(post)
            }
            Some(id) => {
                let post = posts
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or(BlogError::Database(sqlx::Error::RowNotFound))?;
                post.author = draft.author;
                post.title = draft.title.clone();
                post.body = draft.body.clone();
                post.updated_at = now;
                Ok(post.clone())
            }
        }
    }

    async fn find_by_id(&self, id: &PostId) -> BlogResult<Option<Post>> {
        self.guard()?;
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == *id)
            .cloned())
    }

    async fn list_all(&self) -> BlogResult<Vec<Post>> {
        self.guard()?;
        Ok(self.posts.lock().unwrap().clone())
    }
}

impl CommentRepository for MemBlogRepository {
    async fn save(&self, draft: &CommentDraft) -> BlogResult<Comment> {
        self.guard()?;
        let now = Utc::now();
        let mut comments = self.comments.lock().unwrap();

        match draft.id {
            None => {
                let comment = Comment {
                    id: CommentId::new(),
                    user_id: draft.user_id,
                    post_id: draft.post_id,
                    body: draft.body.clone(),
                    created_at: now,
                    updated_at: now,
                };
                comments.push(comment.clone());
                Ok(comment)
            }
            Some(id) => {
                let comment = comments
                    .iter_mut()
                    .find(|c| c.id == id)
                    .ok_or(BlogError::Database(sqlx::Error::RowNotFound))?;
                comment.user_id = draft.user_id;
                comment.post_id = draft.post_id;
                comment.body = draft.body.clone();
                comment.updated_at = now;
                Ok(comment.clone())
            }
        }
    }

    async fn find_by_id(&self, id: &CommentId) -> BlogResult<Option<Comment>> {
        self.guard()?;
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == *id)
            .cloned())
    }

    async fn list_all(&self) -> BlogResult<Vec<Comment>> {
        self.guard()?;
        Ok(self.comments.lock().unwrap().clone())
    }
}

impl PostRelationLoader for MemBlogRepository {
    async fn with_author(&self, post: &Post) -> BlogResult<User> {
        self.guard()?;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == post.author)
            .cloned()
            .ok_or_else(|| BlogError::Internal(format!("Author missing for post {}", post.id)))
    }

    async fn with_comments(&self, post: &Post) -> BlogResult<Vec<Comment>> {
        self.guard()?;
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post.id)
            .cloned()
            .collect())
    }
}

mod payload_tests {
    use crate::error::BlogError;
    use crate::presentation::dto::{SaveCommentRequest, SaveUserRequest};
    use crate::presentation::payload::parse_payload;
    use serde_json::json;

    #[test]
    fn test_empty_payloads_rejected() {
        for payload in [
            json!({}),
            json!(null),
            json!([]),
            json!(""),
            json!(0),
            json!(false),
        ] {
            assert!(matches!(
                parse_payload::<SaveUserRequest>(payload),
                Err(BlogError::EmptyPayload)
            ));
        }
    }

    #[test]
    fn test_missing_fields_rejected_as_malformed() {
        let err = parse_payload::<SaveUserRequest>(json!({"username": "alice"})).unwrap_err();
        assert!(matches!(err, BlogError::MalformedPayload(_)));
        assert_eq!(err.kind().status_code(), 400);
    }

    #[test]
    fn test_valid_payload_parses() {
        let req: SaveUserRequest =
            parse_payload(json!({"username": "alice", "password": "secret"})).unwrap();
        assert_eq!(req.username, "alice");
        assert!(req.id.is_none());
    }

    #[test]
    fn test_camel_case_field_names() {
        let user_id = uuid::Uuid::new_v4();
        let post_id = uuid::Uuid::new_v4();
        let req: SaveCommentRequest = parse_payload(json!({
            "userId": user_id,
            "postId": post_id,
            "body": "nice post",
        }))
        .unwrap();
        assert_eq!(req.user_id, user_id);
        assert_eq!(req.post_id, post_id);
    }
}

mod save_tests {
    use super::MemBlogRepository;
    use crate::domain::entity::user::UserDraft;
    use crate::domain::repository::UserRepository;
    use crate::error::BlogError;
    use kernel::id::UserId;

    #[tokio::test]
    async fn test_save_without_id_inserts_and_assigns_identity() {
        let repo = MemBlogRepository::default();

        let user = repo.seed_user("alice").await;

        assert_eq!(repo.user_count(), 1);
        assert!(user.created_at <= user.updated_at);
    }

    #[tokio::test]
    async fn test_save_with_bound_id_updates_in_place() {
        let repo = MemBlogRepository::default();
        let user = repo.seed_user("alice").await;

        let updated = UserRepository::save(
            &repo,
            &UserDraft {
                id: Some(user.id),
                username: "alice2".to_string(),
                password_hash: user.password_hash.clone(),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.id, user.id);
        assert_eq!(updated.username, "alice2");
        assert_eq!(repo.user_count(), 1);
        assert!(updated.updated_at >= user.updated_at);
    }

    #[tokio::test]
    async fn test_post_save_with_bound_id_updates_in_place() {
        use crate::domain::entity::post::PostDraft;
        use crate::domain::repository::PostRepository;

        let repo = MemBlogRepository::default();
        let author = repo.seed_user("alice").await;
        let post = repo.seed_post(author.id, "draft title").await;

        let updated = PostRepository::save(
            &repo,
            &PostDraft {
                id: Some(post.id),
                author: author.id,
                title: "final title".to_string(),
                body: post.body.clone(),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.id, post.id);
        assert_eq!(updated.title, "final title");
        assert_eq!(repo.post_count(), 1);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_is_a_store_error() {
        let repo = MemBlogRepository::default();

        let err = UserRepository::save(
            &repo,
            &UserDraft {
                id: Some(UserId::new()),
                username: "ghost".to_string(),
                password_hash: "hash".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, BlogError::Database(_)));
        assert_eq!(err.kind().status_code(), 500);
    }
}

mod create_user_tests {
    use super::MemBlogRepository;
    use crate::application::{CreateUserInput, CreateUserUseCase};
    use crate::error::BlogError;
    use platform::password::{HashedPassword, RawPassword};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_password_stored_hashed() {
        let repo = MemBlogRepository::default();
        let use_case = CreateUserUseCase::new(Arc::new(repo.clone()));

        let user = use_case
            .execute(CreateUserInput {
                id: None,
                username: "alice".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_ne!(user.password_hash, "secret");

        let stored = HashedPassword::from_phc(user.password_hash).unwrap();
        let candidate = RawPassword::new("secret".to_string()).unwrap();
        assert!(stored.verify(&candidate).unwrap());
    }

    #[tokio::test]
    async fn test_empty_password_rejected_before_any_write() {
        let repo = MemBlogRepository::default();
        let use_case = CreateUserUseCase::new(Arc::new(repo.clone()));

        let err = use_case
            .execute(CreateUserInput {
                id: None,
                username: "alice".to_string(),
                password: "".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, BlogError::Validation(_)));
        assert_eq!(repo.user_count(), 0);
    }
}

mod fetch_post_tests {
    use super::MemBlogRepository;
    use crate::application::FetchPostUseCase;
    use crate::error::BlogError;
    use kernel::id::PostId;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_relations_loaded_for_the_right_post() {
        let repo = MemBlogRepository::default();
        let author = repo.seed_user("alice").await;
        let reader = repo.seed_user("bob").await;

        let first = repo.seed_post(author.id, "first").await;
        let second = repo.seed_post(author.id, "second").await;

        repo.seed_comment(reader.id, first.id, "on first").await;
        repo.seed_comment(author.id, first.id, "reply on first").await;
        repo.seed_comment(reader.id, second.id, "on second").await;

        let use_case = FetchPostUseCase::new(Arc::new(repo));
        let loaded = use_case.execute(&first.id).await.unwrap();

        assert_eq!(loaded.post.id, first.id);
        assert_eq!(loaded.author.id, author.id);
        assert_eq!(loaded.author.username, "alice");
        assert_eq!(loaded.comments.len(), 2);
        assert!(loaded.comments.iter().all(|c| c.post_id == first.id));
    }

    #[tokio::test]
    async fn test_missing_post_is_not_found() {
        let repo = MemBlogRepository::default();
        let use_case = FetchPostUseCase::new(Arc::new(repo));

        let err = use_case.execute(&PostId::new()).await.unwrap_err();

        assert!(matches!(err, BlogError::NotFound));
        assert_eq!(err.kind().status_code(), 404);
    }
}

mod listing_tests {
    use super::MemBlogRepository;
    use crate::domain::repository::{CommentRepository, UserRepository};

    #[tokio::test]
    async fn test_list_all_returns_every_row() {
        let repo = MemBlogRepository::default();
        let alice = repo.seed_user("alice").await;
        let bob = repo.seed_user("bob").await;
        let post = repo.seed_post(alice.id, "first").await;
        let comment = repo.seed_comment(bob.id, post.id, "hello").await;

        let users = UserRepository::list_all(&repo).await.unwrap();
        assert_eq!(users.len(), 2);

        let comments = CommentRepository::list_all(&repo).await.unwrap();
        assert_eq!(comments.len(), 1);

        let found = CommentRepository::find_by_id(&repo, &comment.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.body, "hello");
        assert_eq!(found.post_id, post.id);
    }
}

mod router_tests {
    use super::MemBlogRepository;
    use crate::presentation::router::blog_router_generic;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_empty_body_is_400_and_writes_nothing() {
        let repo = MemBlogRepository::default();
        let app = blog_router_generic(repo.clone());

        let response = app
            .oneshot(json_request("POST", "/post", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repo.post_count(), 0);
    }

    #[tokio::test]
    async fn test_save_user_returns_id() {
        let repo = MemBlogRepository::default();
        let app = blog_router_generic(repo.clone());

        let response = app
            .oneshot(json_request(
                "POST",
                "/user",
                json!({"username": "alice", "password": "secret"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body.get("id").is_some());
        assert_eq!(repo.user_count(), 1);
    }

    #[tokio::test]
    async fn test_save_user_with_bound_id_updates() {
        let repo = MemBlogRepository::default();
        let app = blog_router_generic(repo.clone());
        let user = repo.seed_user("alice").await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/user",
                json!({
                    "id": user.id.into_uuid(),
                    "username": "alice2",
                    "password": "secret",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], json!(user.id.into_uuid()));
        assert_eq!(repo.user_count(), 1);
        assert_eq!(repo.users.lock().unwrap()[0].username, "alice2");
    }

    #[tokio::test]
    async fn test_get_user_hides_the_password_hash() {
        let repo = MemBlogRepository::default();
        let app = blog_router_generic(repo.clone());
        let user = repo.seed_user("alice").await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/user/{}", user.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["username"], "alice");
        assert!(body.get("passwordHash").is_none());
        assert!(body.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_get_missing_user_is_404() {
        let repo = MemBlogRepository::default();
        let app = blog_router_generic(repo);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/user/{}", uuid::Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_posts_returns_every_row() {
        let repo = MemBlogRepository::default();
        let app = blog_router_generic(repo.clone());
        let author = repo.seed_user("alice").await;
        repo.seed_post(author.id, "first").await;
        repo.seed_post(author.id, "second").await;

        let response = app
            .oneshot(Request::builder().uri("/posts").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_post_includes_author_and_comments() {
        let repo = MemBlogRepository::default();
        let app = blog_router_generic(repo.clone());
        let author = repo.seed_user("alice").await;
        let post = repo.seed_post(author.id, "first").await;
        repo.seed_comment(author.id, post.id, "hello").await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/post/{}", post.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["author"]["username"], "alice");
        assert_eq!(body["comments"].as_array().unwrap().len(), 1);
        assert_eq!(body["comments"][0]["body"], "hello");
    }

    #[tokio::test]
    async fn test_get_missing_post_is_404() {
        let repo = MemBlogRepository::default();
        let app = blog_router_generic(repo);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/post/{}", uuid::Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_save_comment_returns_id() {
        let repo = MemBlogRepository::default();
        let app = blog_router_generic(repo.clone());
        let author = repo.seed_user("alice").await;
        let post = repo.seed_post(author.id, "first").await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/comment",
                json!({
                    "userId": author.id.into_uuid(),
                    "postId": post.id.into_uuid(),
                    "body": "nice",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body.get("id").is_some());
    }

    #[tokio::test]
    async fn test_store_error_is_an_opaque_500() {
        let repo = MemBlogRepository::default();
        let app = blog_router_generic(repo.clone());
        repo.break_store();

        let response = app
            .oneshot(Request::builder().uri("/posts").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        // No store detail reaches the client
        assert_eq!(body["detail"], "Internal server error");
    }
}
