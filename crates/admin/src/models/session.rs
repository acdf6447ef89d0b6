//! Admin session types.

use chrono::{DateTime, Utc};

use kotobcom_core::{AdminSessionId, AdminUserId, SessionToken};

/// A server-side admin session row.
///
/// Created at login, validated on every authenticated request (which also
/// slides `last_accessed`), and removed at logout or when expired sessions
/// are swept during the owner's next login.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminSession {
    /// Session row ID.
    pub id: AdminSessionId,
    /// The admin this session belongs to.
    pub admin_id: AdminUserId,
    /// Bearer token presented by the client.
    pub session_token: SessionToken,
    /// When the session stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// Last time the token was presented.
    pub last_accessed: DateTime<Utc>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
}
