//! Customer route handlers.
//!
//! Customers are a derived view over orders; there is nothing to mutate.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use kotobcom_core::sanitize_input;

use crate::db::CustomerRepository;
use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::models::{CustomerStats, CustomerSummary};
use crate::state::AppState;

/// Customer listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring match on name, phone, and city.
    pub search: Option<String>,
}

/// List customer summaries, most recently active first.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<CustomerSummary>>> {
    let search = query
        .search
        .as_deref()
        .map(sanitize_input)
        .filter(|s| !s.is_empty());

    let customers = CustomerRepository::new(state.pool())
        .summaries(search.as_deref())
        .await?;

    Ok(Json(customers))
}

/// Aggregate stats across the whole customer base.
#[instrument(skip_all)]
pub async fn stats(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<CustomerStats>> {
    let stats = CustomerRepository::new(state.pool()).stats().await?;
    Ok(Json(stats))
}
