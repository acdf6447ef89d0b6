//! Activity log route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::db::ActivityLogRepository;
use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::models::ActivityLogEntry;
use crate::state::AppState;

/// Most entries any request returns.
const MAX_LIMIT: i64 = 100;

/// Activity log query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Entries to return; defaults to and is capped at 100.
    pub limit: Option<i64>,
}

/// The most recent audit entries, newest first.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ActivityLogEntry>>> {
    let limit = query.limit.unwrap_or(MAX_LIMIT).clamp(1, MAX_LIMIT);
    let entries = ActivityLogRepository::new(state.pool())
        .list_recent(limit)
        .await?;

    Ok(Json(entries))
}
