//! Login Form DTO

use serde::Deserialize;

/// Login form submission (application/x-www-form-urlencoded)
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
