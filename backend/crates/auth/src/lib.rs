//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, login views, router, gate middleware
//!
//! ## Features
//! - Username + password login with server-rendered login page
//! - Server-side sessions with HMAC-signed cookie tokens
//! - Request gate that redirects unauthenticated clients to the login page
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, per-record salt
//! - Unknown-username and wrong-password failures are indistinguishable
//!   from outside the process
//! - Session cookies are HttpOnly and signed; the session payload holds
//!   only the user identifier

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthGateState, require_session};
pub use presentation::router::{auth_router, auth_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
