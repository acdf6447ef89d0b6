//! Audit trail recording.
//!
//! Every mutating admin action lands in `admin_activity_logs`. Recording is
//! best-effort: a failed insert is logged and swallowed, because losing one
//! audit row must never fail the action it describes.

use serde_json::Value;
use sqlx::PgPool;
use tracing::warn;

use crate::db::ActivityLogRepository;
use crate::middleware::ClientInfo;
use crate::models::{CurrentAdmin, NewActivityLog};

/// Audit action names.
pub mod action {
    pub const LOGIN: &str = "login";
    pub const LOGOUT: &str = "logout";
    pub const CREATE: &str = "create";
    pub const UPDATE: &str = "update";
    pub const DELETE: &str = "delete";
    pub const UPDATE_STATUS: &str = "update_status";
}

/// Audit target type names.
pub mod target {
    pub const ADMIN_USER: &str = "admin_user";
    pub const PRODUCT: &str = "product";
    pub const ORDER: &str = "order";
}

/// Audit trail service.
pub struct AuditService<'a> {
    logs: ActivityLogRepository<'a>,
}

impl<'a> AuditService<'a> {
    /// Create a new audit service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            logs: ActivityLogRepository::new(pool),
        }
    }

    /// Record one audit entry, swallowing storage failures.
    pub async fn record(
        &self,
        admin: &CurrentAdmin,
        client: &ClientInfo,
        action: &str,
        target_type: &str,
        target_id: Option<String>,
        details: Value,
    ) {
        let entry = NewActivityLog {
            admin_id: admin.id,
            action: action.to_owned(),
            target_type: target_type.to_owned(),
            target_id,
            details,
            ip_address: client.ip_address.clone(),
            user_agent: client.user_agent.clone(),
        };

        if let Err(e) = self.logs.insert(&entry).await {
            warn!(
                action = %entry.action,
                target_type = %entry.target_type,
                error = %e,
                "failed to record activity log entry"
            );
        }
    }
}
