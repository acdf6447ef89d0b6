//! Admin account management route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use kotobcom_core::{AdminUserId, Email, sanitize_input, validate_password};

use crate::db::AdminUserRepository;
use crate::error::{AppError, Result};
use crate::middleware::{ClientInfo, RequireAdminAuth};
use crate::models::CurrentAdmin;
use crate::services::AuditService;
use crate::services::audit::{action, target};
use crate::state::AppState;

/// New admin account payload.
#[derive(Debug, Deserialize)]
pub struct CreateAdminPayload {
    /// Display name.
    pub name: String,
    /// Email address, unique across admins.
    pub email: String,
    /// Plaintext password, checked against the strength policy.
    pub password: String,
}

/// List every admin account.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<Vec<CurrentAdmin>>> {
    let admins = AdminUserRepository::new(state.pool()).list_all().await?;
    Ok(Json(admins))
}

/// Create an admin account.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    client: ClientInfo,
    Json(payload): Json<CreateAdminPayload>,
) -> Result<Json<CurrentAdmin>> {
    let mut errors = Vec::new();

    let name = sanitize_input(&payload.name);
    if name.is_empty() {
        errors.push("Name is required".to_owned());
    }

    let email = match Email::parse(&sanitize_input(&payload.email)) {
        Ok(email) => Some(email),
        Err(e) => {
            errors.push(e.to_string());
            None
        }
    };

    let password_check = validate_password(&payload.password);
    errors.extend(password_check.into_errors().into_iter().map(String::from));

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let Some(email) = email else {
        return Err(AppError::Internal("validated fields missing".to_owned()));
    };

    let password = payload.password;
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AppError::Internal(format!("hashing task failed: {e}")))?
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let created = AdminUserRepository::new(state.pool())
        .create(&name, &email, &hash)
        .await?;

    AuditService::new(state.pool())
        .record(
            &admin,
            &client,
            action::CREATE,
            target::ADMIN_USER,
            Some(created.id.to_string()),
            json!({ "name": created.name, "email": created.email }),
        )
        .await;

    Ok(Json(created))
}

/// Delete an admin account.
///
/// Self-deletion is refused so the back office can't lock itself out one
/// account at a time by accident.
#[instrument(skip_all, fields(target_admin_id = %id))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    client: ClientInfo,
    Path(id): Path<AdminUserId>,
) -> Result<Json<serde_json::Value>> {
    if id == admin.id {
        return Err(AppError::Forbidden(
            "You cannot delete your own account".to_owned(),
        ));
    }

    let removed_name = AdminUserRepository::new(state.pool()).delete(id).await?;

    AuditService::new(state.pool())
        .record(
            &admin,
            &client,
            action::DELETE,
            target::ADMIN_USER,
            Some(id.to_string()),
            json!({ "name": removed_name }),
        )
        .await;

    Ok(Json(json!({ "success": true })))
}
