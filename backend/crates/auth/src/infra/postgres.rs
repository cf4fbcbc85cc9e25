//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{credential::Credential, identity::Identity, session::AuthSession};
use crate::domain::repository::{CredentialStore, SessionRepository};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;
use platform::password::HashedPassword;

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Credential Store Implementation
// ============================================================================

impl CredentialStore for PgAuthRepository {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT
                id,
                username,
                password_hash
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_credential()).transpose()
    }

    async fn find_identity_by_id(&self, user_id: &UserId) -> AuthResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT
                id,
                username
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_identity()))
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                session_id,
                user_id,
                expires_at_ms,
                created_at,
                last_activity_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user_id.as_uuid())
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .bind(session.last_activity_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                expires_at_ms,
                created_at,
                last_activity_at
            FROM sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_session()))
    }

    async fn update(&self, session: &AuthSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE sessions SET
                expires_at_ms = $2,
                last_activity_at = $3
            WHERE session_id = $1
            "#,
        )
        .bind(session.session_id)
        .bind(session.expires_at_ms)
        .bind(session.last_activity_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: Uuid,
    username: String,
    password_hash: String,
}

impl CredentialRow {
    fn into_credential(self) -> AuthResult<Credential> {
        let password_hash = HashedPassword::from_phc(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid stored password hash: {e}")))?;

        Ok(Credential {
            user_id: UserId::from_uuid(self.id),
            username: self.username,
            password_hash,
        })
    }
}

#[derive(sqlx::FromRow)]
struct IdentityRow {
    id: Uuid,
    username: String,
}

impl IdentityRow {
    fn into_identity(self) -> Identity {
        Identity {
            user_id: UserId::from_uuid(self.id),
            username: self.username,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    user_id: Uuid,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
    last_activity_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> AuthSession {
        AuthSession {
            session_id: self.session_id,
            user_id: UserId::from_uuid(self.user_id),
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
            last_activity_at: self.last_activity_at,
        }
    }
}
