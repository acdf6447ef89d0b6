//! Activity log repository for the admin audit trail.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::{ActivityLogEntry, NewActivityLog};

/// Repository for activity log database operations.
pub struct ActivityLogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ActivityLogRepository<'a> {
    /// Create a new activity log repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record one audit trail entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, entry: &NewActivityLog) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO admin_activity_logs \
             (admin_id, action, target_type, target_id, details, ip_address, user_agent) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(entry.admin_id.as_uuid())
        .bind(&entry.action)
        .bind(&entry.target_type)
        .bind(&entry.target_id)
        .bind(&entry.details)
        .bind(&entry.ip_address)
        .bind(&entry.user_agent)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// The most recent audit entries, joined with the acting admin's name.
    ///
    /// Entries survive admin deletion; their `admin_name` comes back `None`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<ActivityLogEntry>, RepositoryError> {
        let entries = sqlx::query_as::<_, ActivityLogEntry>(
            "SELECT l.id, l.admin_id, a.name AS admin_name, l.action, l.target_type, \
             l.target_id, l.details, l.ip_address, l.user_agent, l.created_at \
             FROM admin_activity_logs l \
             LEFT JOIN admin_users a ON a.id = l.admin_id \
             ORDER BY l.created_at DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }
}
