//! Authentication route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::db::SessionRepository;
use crate::error::{Result, clear_sentry_user};
use crate::middleware::{BearerToken, ClientInfo, RequireAdminAuth};
use crate::models::CurrentAdmin;
use crate::services::audit::{action, target};
use crate::services::{AuditService, AuthService, LoginResponse};
use crate::state::AppState;

/// Login request payload.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    /// Email address; validated server-side, so a plain string here.
    pub email: String,
    /// Plaintext password, compared against the stored bcrypt hash.
    pub password: String,
}

/// Authenticate and issue a session token.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    client: ClientInfo,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>> {
    let auth = AuthService::new(
        state.pool(),
        state.login_limiter(),
        state.config().session_timeout_hours,
        state.config().login_rate_window,
    );
    let response = auth.login(&payload.email, &payload.password).await?;

    AuditService::new(state.pool())
        .record(
            &response.admin,
            &client,
            action::LOGIN,
            target::ADMIN_USER,
            Some(response.admin.id.to_string()),
            json!({}),
        )
        .await;

    Ok(Json(response))
}

/// The current admin, as resolved from the presented token.
#[instrument(skip_all)]
pub async fn session(RequireAdminAuth(admin): RequireAdminAuth) -> Json<CurrentAdmin> {
    Json(admin)
}

/// Revoke the presented session token.
///
/// Succeeds whether or not the token still had a session row; logging out
/// twice is not an error.
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    BearerToken(token): BearerToken,
    client: ClientInfo,
) -> Result<Json<serde_json::Value>> {
    SessionRepository::new(state.pool())
        .delete_by_token(&token)
        .await?;

    AuditService::new(state.pool())
        .record(
            &admin,
            &client,
            action::LOGOUT,
            target::ADMIN_USER,
            Some(admin.id.to_string()),
            json!({}),
        )
        .await;

    clear_sentry_user();

    Ok(Json(json!({ "success": true })))
}
