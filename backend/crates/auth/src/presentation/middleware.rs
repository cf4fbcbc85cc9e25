//! Authorization Gate Middleware
//!
//! A binary request gate: a valid session lets the request through and
//! makes the resolved [`Identity`] available to handlers via request
//! extensions; anything else redirects to the login page. The gate does
//! not check per-resource ownership.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialStore, SessionRepository};
use platform::cookie::extract_cookie;

/// Gate state shared across protected routes
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: CredentialStore + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthGateState<R>
where
    R: CredentialStore + SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

/// Middleware that requires a valid session
pub async fn require_session<R>(
    state: AuthGateState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: CredentialStore + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(req.headers(), &state.config.session_cookie_name);

    let Some(token) = token else {
        return Err(Redirect::to("/login").into_response());
    };

    let use_case =
        CheckSessionUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    match use_case.identity(&token).await {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            Ok(next.run(req).await)
        }
        Err(e) => {
            e.log();
            Err(Redirect::to("/login").into_response())
        }
    }
}
