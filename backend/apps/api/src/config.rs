//! Server Configuration
//!
//! One explicit struct built from the environment at startup and handed
//! to the router-construction function. The session secret is never
//! hardcoded; debug builds fall back to a random one.

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Listen address
    pub bind_addr: SocketAddr,
    /// Connection pool size
    pub max_connections: u32,
    /// Auth layer configuration (secret, cookie policy, session TTL)
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Build configuration from the environment
    ///
    /// `DATABASE_URL` is required. `BIND_ADDR` defaults to
    /// `0.0.0.0:3000`. Release builds require `SESSION_SECRET`
    /// (base64, 32 bytes); debug builds generate a random secret.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .context("BIND_ADDR must be a host:port address")?;

        let auth = if cfg!(debug_assertions) {
            AuthConfig::development()
        } else {
            let secret_b64 = env::var("SESSION_SECRET")
                .context("SESSION_SECRET must be set in production")?;
            let secret_bytes = general_purpose::STANDARD
                .decode(&secret_b64)
                .context("SESSION_SECRET must be valid base64")?;
            let secret: [u8; 32] = secret_bytes
                .as_slice()
                .try_into()
                .ok()
                .context("SESSION_SECRET must decode to exactly 32 bytes")?;

            AuthConfig {
                session_secret: secret,
                ..AuthConfig::default()
            }
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections: 5,
            auth,
        })
    }
}
