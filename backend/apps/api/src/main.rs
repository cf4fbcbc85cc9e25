//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are handled
//! inside the auth and blog crates.

use auth::domain::repository::SessionRepository;
use auth::{AuthGateState, PgAuthRepository, auth_router, require_session};
use axum::extract::Request;
use axum::middleware::Next;
use axum::{Router, middleware};
use blog::{PgBlogRepository, blog_router};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::AppConfig;

/// Assemble the full router: public login surface plus the gated
/// entity endpoints
fn build_router(pool: PgPool, config: &AppConfig) -> Router {
    let auth_repo = PgAuthRepository::new(pool.clone());
    let blog_repo = PgBlogRepository::new(pool);

    let gate = AuthGateState::new(auth_repo.clone(), config.auth.clone());

    let protected = blog_router(blog_repo).layer(middleware::from_fn(
        move |req: Request, next: Next| {
            let state = gate.clone();
            async move { require_session(state, req, next).await }
        },
    ));

    Router::new()
        .merge(auth_router(auth_repo, config.auth.clone()))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,blog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired sessions
    // Errors here should not prevent server startup
    let session_store = PgAuthRepository::new(pool.clone());
    match session_store.cleanup_expired().await {
        Ok(deleted) => {
            tracing::info!(sessions_deleted = deleted, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }

    // Build router
    let app = build_router(pool, &config);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
