//! Order tracking route handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use kotobcom_core::{OrderNumber, PhoneNumber};

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::models::{Order, TrackedOrderItem};
use crate::state::AppState;

/// Track-order query parameters.
#[derive(Debug, Deserialize)]
pub struct TrackQuery {
    /// The order number quoted to the customer, like `KTC-1735689600000`.
    pub order_number: String,
    /// The phone number given at checkout.
    pub phone: String,
}

/// A tracked order with its lines.
#[derive(Debug, Serialize)]
pub struct TrackedOrder {
    /// The order.
    pub order: Order,
    /// Order lines joined with current product titles.
    pub items: Vec<TrackedOrderItem>,
}

/// Look up an order by number and customer phone.
///
/// Both must match the same order. A wrong phone returns the same 404 as
/// an unknown order number, so numbers cannot be probed. Phones are
/// compared digit-by-digit; formatting differences do not matter.
#[instrument(skip(state, query))]
pub async fn track(
    State(state): State<AppState>,
    Query(query): Query<TrackQuery>,
) -> Result<Json<TrackedOrder>> {
    let order_number = OrderNumber::parse(query.order_number.trim())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let phone = PhoneNumber::parse(query.phone.trim())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let orders = OrderRepository::new(state.pool());
    let order = orders
        .find_by_number(&order_number)
        .await?
        .filter(|order| order.customer_phone.digits() == phone.digits())
        .ok_or_else(|| AppError::NotFound("order not found".to_owned()))?;

    let items = orders.list_items_with_products(order.id).await?;

    Ok(Json(TrackedOrder { order, items }))
}
