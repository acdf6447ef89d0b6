//! Order management route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use kotobcom_core::{OrderId, OrderStatus};

use crate::db::OrderRepository;
use crate::error::Result;
use crate::middleware::{ClientInfo, RequireAdminAuth};
use crate::models::{Order, OrderWithItems};
use crate::services::AuditService;
use crate::services::audit::{action, target};
use crate::state::AppState;

/// Status update payload.
#[derive(Debug, Deserialize)]
pub struct StatusPayload {
    /// New fulfilment status.
    pub status: OrderStatus,
}

/// List every order with its lines, newest first.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<Vec<OrderWithItems>>> {
    let orders = OrderRepository::new(state.pool()).list_with_items().await?;
    Ok(Json(orders))
}

/// Move an order to a new fulfilment status.
///
/// Any status can be set directly; the pending → delivered progression is
/// conventional, not enforced.
#[instrument(skip_all, fields(order_id = %id, status = %payload.status))]
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    client: ClientInfo,
    Path(id): Path<OrderId>,
    Json(payload): Json<StatusPayload>,
) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool())
        .update_status(id, payload.status)
        .await?;

    AuditService::new(state.pool())
        .record(
            &admin,
            &client,
            action::UPDATE_STATUS,
            target::ORDER,
            Some(order.id.to_string()),
            json!({ "order_number": order.order_number, "status": order.status }),
        )
        .await;

    Ok(Json(order))
}
