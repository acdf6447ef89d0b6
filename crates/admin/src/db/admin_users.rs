//! Admin user repository.

use sqlx::PgPool;

use kotobcom_core::{AdminUserId, Email};

use super::RepositoryError;
use crate::models::{AdminUser, CurrentAdmin};

const ADMIN_COLUMNS: &str = "id, name, email, password_hash, created_at";

/// Repository for admin user database operations.
pub struct AdminUserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminUserRepository<'a> {
    /// Create a new admin user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every admin account, oldest first. Hashes stay in the database.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<CurrentAdmin>, RepositoryError> {
        let admins = sqlx::query_as::<_, CurrentAdmin>(
            "SELECT id, name, email, created_at FROM admin_users ORDER BY created_at",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(admins)
    }

    /// Look up an admin by email, hash included. Login only.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_email(&self, email: &Email) -> Result<Option<AdminUser>, RepositoryError> {
        let query = format!("SELECT {ADMIN_COLUMNS} FROM admin_users WHERE email = $1");
        let admin = sqlx::query_as::<_, AdminUser>(&query)
            .bind(email.as_str())
            .fetch_optional(self.pool)
            .await?;

        Ok(admin)
    }

    /// Create an admin account from an already-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &str,
        email: &Email,
        password_hash: &str,
    ) -> Result<CurrentAdmin, RepositoryError> {
        let admin = sqlx::query_as::<_, CurrentAdmin>(
            "INSERT INTO admin_users (name, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, email, created_at",
        )
        .bind(name)
        .bind(email.as_str())
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("Email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(admin)
    }

    /// Delete an admin account, returning its name for the audit trail.
    ///
    /// Sessions go with it via the foreign key cascade.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the admin doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: AdminUserId) -> Result<String, RepositoryError> {
        let name: Option<(String,)> =
            sqlx::query_as("DELETE FROM admin_users WHERE id = $1 RETURNING name")
                .bind(id.as_uuid())
                .fetch_optional(self.pool)
                .await?;

        name.map(|(name,)| name).ok_or(RepositoryError::NotFound)
    }
}
