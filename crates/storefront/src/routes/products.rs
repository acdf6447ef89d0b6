//! Product route handlers.
//!
//! Listing and detail responses carry all three language variants; the
//! thin client picks the one to display.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use kotobcom_core::{Language, ProductCategory, ProductId};

use crate::error::{AppError, Result};
use crate::models::Product;
use crate::services::{ProductFilter, ProductSort};
use crate::state::AppState;

/// Product listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Keep only this category.
    pub category: Option<ProductCategory>,
    /// Keep only products matching this featured flag.
    pub featured: Option<bool>,
    /// Case-insensitive substring match against the title variants.
    pub search: Option<String>,
    /// Sort order; newest first when absent.
    pub sort: Option<ProductSort>,
    /// Language whose title variant drives the `name` sort. Defaults to Arabic.
    pub lang: Option<Language>,
}

/// List products with optional filtering, search, and sorting.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>> {
    let filter = ProductFilter {
        category: query.category,
        featured: query.featured,
        search: query.search,
        sort: query.sort.unwrap_or_default(),
        language: query.lang.unwrap_or_default(),
    };

    let products = state.catalog().query(&filter).await?;
    Ok(Json(products))
}

/// Get a single product by ID.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = state
        .catalog()
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("product not found".to_owned()))?;

    Ok(Json(product))
}
