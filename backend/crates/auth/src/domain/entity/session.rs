//! Auth Session Entity
//!
//! A server-side session row. The payload is deliberately minimal: the
//! user identifier alone, so the session never carries stale
//! denormalized user data.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use uuid::Uuid;

/// Auth session entity
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Reference to the authenticated user
    pub user_id: UserId,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl AuthSession {
    /// Create a new session for a user
    ///
    /// TTL is provided by the application layer (config), not
    /// hard-coded here.
    pub fn new(user_id: UserId, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }
}
