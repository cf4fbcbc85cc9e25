//! Cookie Management Infrastructure
//!
//! Building and parsing of Set-Cookie / Cookie headers. Policy
//! (names, Secure flag, SameSite, lifetime) comes in through
//! [`CookieConfig`]; callers never format header strings themselves.

use axum::http::{HeaderMap, HeaderValue, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Build a Set-Cookie header value
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut parts = vec![format!("{}={}", self.name, value)];

        if self.http_only {
            parts.push("HttpOnly".to_string());
        }
        if self.secure {
            parts.push("Secure".to_string());
        }
        parts.push(format!("SameSite={}", self.same_site.as_str()));
        parts.push(format!("Path={}", self.path));
        if let Some(max_age) = self.max_age_secs {
            parts.push(format!("Max-Age={max_age}"));
        }

        parts.join("; ")
    }

    /// Build a Set-Cookie header value that expires the cookie
    pub fn build_delete_cookie(&self) -> String {
        format!("{}=; HttpOnly; Path={}; Max-Age=0", self.name, self.path)
    }
}

/// Extract a cookie value from request headers
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    for pair in cookie_header.split(';') {
        if let Some((key, value)) = pair.trim().split_once('=') {
            if key == name {
                return Some(value.to_string());
            }
        }
    }

    None
}

/// Create a Set-Cookie header value
pub fn set_cookie_header(config: &CookieConfig, value: &str) -> HeaderValue {
    HeaderValue::from_str(&config.build_set_cookie(value))
        .unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// Create a Set-Cookie header that deletes the cookie
pub fn delete_cookie_header(config: &CookieConfig) -> HeaderValue {
    HeaderValue::from_str(&config.build_delete_cookie())
        .unwrap_or_else(|_| HeaderValue::from_static(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_cookie_carries_all_attributes() {
        let config = CookieConfig {
            name: "test".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/api".to_string(),
            max_age_secs: Some(3600),
        };

        let cookie = config.build_set_cookie("value123");
        assert!(cookie.starts_with("test=value123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/api"));
        assert!(cookie.contains("Max-Age=3600"));
    }

    #[test]
    fn test_insecure_config_omits_secure() {
        let config = CookieConfig {
            secure: false,
            ..CookieConfig::default()
        };
        assert!(!config.build_set_cookie("v").contains("Secure"));
    }

    #[test]
    fn test_delete_cookie_expires_immediately() {
        let cookie = CookieConfig::default().build_delete_cookie();
        assert!(cookie.starts_with("session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; session=abc123; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, "session"),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_without_header() {
        assert_eq!(extract_cookie(&HeaderMap::new(), "session"), None);
    }
}
