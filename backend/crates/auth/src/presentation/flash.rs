//! One-Shot Flash Cookie
//!
//! Carries the login error message across the failure redirect. The
//! value is base64url encoded to stay header-safe; the cookie is
//! cleared as soon as the login page renders it.

use axum::http::{HeaderMap, HeaderValue};

use crate::application::config::AuthConfig;
use platform::cookie::{CookieConfig, delete_cookie_header, extract_cookie, set_cookie_header};
use platform::crypto::{from_base64url, to_base64url};

fn flash_cookie_config(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.flash_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        // Short-lived: survives exactly the redirect hop
        max_age_secs: Some(60),
    }
}

/// Set-Cookie header carrying a flash message
pub fn set_flash(config: &AuthConfig, message: &str) -> HeaderValue {
    set_cookie_header(
        &flash_cookie_config(config),
        &to_base64url(message.as_bytes()),
    )
}

/// Set-Cookie header that clears the flash cookie
pub fn clear_flash(config: &AuthConfig) -> HeaderValue {
    delete_cookie_header(&flash_cookie_config(config))
}

/// Read the flash message from request headers, if present
pub fn read_flash(headers: &HeaderMap, config: &AuthConfig) -> Option<String> {
    let raw = extract_cookie(headers, &config.flash_cookie_name)?;
    let bytes = from_base64url(&raw).ok()?;
    String::from_utf8(bytes).ok()
}
