//! Admin user domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kotobcom_core::{AdminUserId, Email};

/// An admin user (domain type).
///
/// Carries the bcrypt password hash, so it is never serialized; responses
/// use [`CurrentAdmin`] instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminUser {
    /// Unique admin user ID.
    pub id: AdminUserId,
    /// Admin's display name.
    pub name: String,
    /// Admin's email address.
    pub email: Email,
    /// Bcrypt hash of the admin's password.
    pub password_hash: String,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    /// The public view of this admin, safe to serialize.
    #[must_use]
    pub fn to_current(&self) -> CurrentAdmin {
        CurrentAdmin {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

/// The authenticated admin identity attached to a request.
///
/// Injected by the `RequireAdminAuth` extractor after token validation,
/// and returned by the auth endpoints. Never contains the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AdminUserId,
    /// Admin's display name.
    pub name: String,
    /// Admin's email address.
    pub email: Email,
    /// When the admin account was created.
    pub created_at: DateTime<Utc>,
}
