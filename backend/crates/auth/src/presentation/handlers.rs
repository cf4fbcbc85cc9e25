//! HTTP Handlers
//!
//! Authentication outcomes are always redirects: success lands on the
//! posts collection, any failure lands back on the login page with one
//! generic flash message. Store failures are logged server-side first.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, LogoutUseCase};
use crate::domain::repository::{CredentialStore, SessionRepository};
use crate::presentation::dto::LoginForm;
use crate::presentation::{flash, views};
use platform::cookie::{
    CookieConfig, delete_cookie_header, extract_cookie, set_cookie_header,
};

/// One message for every login failure; wrong password and unknown
/// username must not be distinguishable from the outside.
const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password";

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: CredentialStore + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

fn session_cookie_config(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.session_ttl.as_secs() as i64),
    }
}

pub(crate) fn build_session_cookie(config: &AuthConfig, token: &str) -> HeaderValue {
    set_cookie_header(&session_cookie_config(config), token)
}

pub(crate) fn clear_session_cookie(config: &AuthConfig) -> HeaderValue {
    delete_cookie_header(&session_cookie_config(config))
}

// ============================================================================
// Login Page
// ============================================================================

/// GET /login
pub async fn login_page<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: CredentialStore + SessionRepository + Clone + Send + Sync + 'static,
{
    match flash::read_flash(&headers, &state.config) {
        Some(message) => (
            [(header::SET_COOKIE, flash::clear_flash(&state.config))],
            views::login_page(Some(&message)),
        )
            .into_response(),
        None => views::login_page(None).into_response(),
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response
where
    R: CredentialStore + SessionRepository + Clone + Send + Sync + 'static,
{
    // A body that does not parse as a login form gets the same redirect
    // as bad credentials, never a raw 4xx
    let Ok(Form(form)) = form else {
        return login_failed_response(&state.config);
    };

    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LoginInput {
        username: form.username,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let cookie = build_session_cookie(&state.config, &output.session_token);

            ([(header::SET_COOKIE, cookie)], Redirect::to("/posts")).into_response()
        }
        Err(e) => {
            e.log();
            login_failed_response(&state.config)
        }
    }
}

fn login_failed_response(config: &AuthConfig) -> Response {
    (
        [(header::SET_COOKIE, flash::set_flash(config, LOGIN_FAILED_MESSAGE))],
        Redirect::to("/login"),
    )
        .into_response()
}

// ============================================================================
// Logout
// ============================================================================

/// POST /logout
pub async fn logout<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: CredentialStore + SessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
        // Ignore errors - just clear the cookie
        let _ = use_case.execute(&token).await;
    }

    (
        [(header::SET_COOKIE, clear_session_cookie(&state.config))],
        Redirect::to("/login"),
    )
        .into_response()
}
