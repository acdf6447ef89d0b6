//! Activity log types for the admin audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kotobcom_core::{ActivityLogId, AdminUserId};

/// One entry of the admin audit trail, joined with the acting admin's name.
///
/// `admin_id` and `admin_name` are `None` when the acting admin account
/// has since been deleted; the log entry itself is kept.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActivityLogEntry {
    /// Log entry ID.
    pub id: ActivityLogId,
    /// The admin who performed the action.
    pub admin_id: Option<AdminUserId>,
    /// Display name of the acting admin.
    pub admin_name: Option<String>,
    /// What was done (`login`, `logout`, `create`, `update`, `delete`,
    /// `update_status`).
    pub action: String,
    /// What kind of thing was acted on (`admin_user`, `product`, `order`).
    pub target_type: String,
    /// Identifier of the acted-on thing, when there is one.
    pub target_id: Option<String>,
    /// Action-specific context.
    pub details: serde_json::Value,
    /// Client IP the action came from.
    pub ip_address: Option<String>,
    /// Client user agent.
    pub user_agent: Option<String>,
    /// When the action happened.
    pub created_at: DateTime<Utc>,
}

/// Data for recording a new activity log entry.
#[derive(Debug, Clone)]
pub struct NewActivityLog {
    /// The admin performing the action.
    pub admin_id: AdminUserId,
    /// What is being done.
    pub action: String,
    /// What kind of thing is acted on.
    pub target_type: String,
    /// Identifier of the acted-on thing, when there is one.
    pub target_id: Option<String>,
    /// Action-specific context.
    pub details: serde_json::Value,
    /// Client IP the action came from.
    pub ip_address: Option<String>,
    /// Client user agent.
    pub user_agent: Option<String>,
}
