//! Admin session repository.
//!
//! Sessions are opaque bearer tokens stored server-side. Validation is a
//! single atomic statement that both checks expiry and slides the
//! `last_accessed` timestamp, so there is no read-then-write window.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use kotobcom_core::{AdminUserId, SessionToken};

use super::RepositoryError;
use crate::models::{AdminSession, CurrentAdmin};

const SESSION_COLUMNS: &str =
    "id, admin_id, session_token, expires_at, last_accessed, created_at";

/// Repository for admin session database operations.
pub struct SessionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SessionRepository<'a> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a freshly issued session token.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        admin_id: AdminUserId,
        token: &SessionToken,
        expires_at: DateTime<Utc>,
    ) -> Result<AdminSession, RepositoryError> {
        let query = format!(
            "INSERT INTO admin_sessions (admin_id, session_token, expires_at) \
             VALUES ($1, $2, $3) \
             RETURNING {SESSION_COLUMNS}"
        );
        let session = sqlx::query_as::<_, AdminSession>(&query)
            .bind(admin_id.as_uuid())
            .bind(token.as_uuid())
            .bind(expires_at)
            .fetch_one(self.pool)
            .await?;

        Ok(session)
    }

    /// Validate a token and return the admin it belongs to.
    ///
    /// Expired or unknown tokens yield `None`. A valid token has its
    /// `last_accessed` slid forward in the same statement.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn validate(
        &self,
        token: &SessionToken,
    ) -> Result<Option<CurrentAdmin>, RepositoryError> {
        let admin = sqlx::query_as::<_, CurrentAdmin>(
            "UPDATE admin_sessions s SET last_accessed = now() \
             FROM admin_users a \
             WHERE s.session_token = $1 \
               AND s.expires_at > now() \
               AND a.id = s.admin_id \
             RETURNING a.id, a.name, a.email, a.created_at",
        )
        .bind(token.as_uuid())
        .fetch_optional(self.pool)
        .await?;

        Ok(admin)
    }

    /// Sweep an admin's expired sessions. Called on their next login.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_expired_for(&self, admin_id: AdminUserId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM admin_sessions WHERE admin_id = $1 AND expires_at <= now()")
            .bind(admin_id.as_uuid())
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Revoke a session by token. Returns whether anything was deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_by_token(&self, token: &SessionToken) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE session_token = $1")
            .bind(token.as_uuid())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
