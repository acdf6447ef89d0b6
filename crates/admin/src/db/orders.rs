//! Order repository for back-office order management.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use kotobcom_core::{OrderId, OrderItemId, OrderStatus, Price, ProductId};

use super::RepositoryError;
use crate::models::{Order, OrderItemDetail, OrderWithItems};

const ORDER_COLUMNS: &str = "id, order_number, customer_name, customer_phone, \
     customer_address, customer_city, total_amount, status, created_at, updated_at";

/// Internal row type for order item queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderItemDetailRow {
    id: OrderItemId,
    order_id: OrderId,
    product_id: ProductId,
    title: String,
    title_ar: String,
    title_fr: String,
    image_url: Option<String>,
    quantity: i32,
    price: Price,
}

impl TryFrom<OrderItemDetailRow> for OrderItemDetail {
    type Error = RepositoryError;

    fn try_from(row: OrderItemDetailRow) -> Result<Self, Self::Error> {
        let quantity = u32::try_from(row.quantity).map_err(|_| {
            RepositoryError::DataCorruption(format!("negative quantity: {}", row.quantity))
        })?;

        Ok(Self {
            id: row.id,
            product_id: row.product_id,
            title: row.title,
            title_ar: row.title_ar,
            title_fr: row.title_fr,
            image_url: row.image_url,
            quantity,
            price: row.price,
        })
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every order, newest first, each with its lines.
    ///
    /// Lines are fetched in one batch and joined with the catalog's title
    /// variants. Products referenced by order lines cannot be deleted (the
    /// foreign key restricts it), so the join always resolves.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored quantity is invalid.
    pub async fn list_with_items(&self) -> Result<Vec<OrderWithItems>, RepositoryError> {
        let query = format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC");
        let orders = sqlx::query_as::<_, Order>(&query)
            .fetch_all(self.pool)
            .await?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<Uuid> = orders.iter().map(|order| order.id.as_uuid()).collect();
        let rows = sqlx::query_as::<_, OrderItemDetailRow>(
            "SELECT oi.id, oi.order_id, oi.product_id, p.title, p.title_ar, p.title_fr, \
             p.image_url, oi.quantity, oi.price \
             FROM order_items oi \
             JOIN products p ON p.id = oi.product_id \
             WHERE oi.order_id = ANY($1) \
             ORDER BY oi.created_at",
        )
        .bind(&order_ids)
        .fetch_all(self.pool)
        .await?;

        let mut items_by_order: HashMap<OrderId, Vec<OrderItemDetail>> = HashMap::new();
        for row in rows {
            let order_id = row.order_id;
            items_by_order
                .entry(order_id)
                .or_default()
                .push(row.try_into()?);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                OrderWithItems { order, items }
            })
            .collect())
    }

    /// Move an order to a new status and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let query = format!(
            "UPDATE orders SET status = $1, updated_at = now() \
             WHERE id = $2 \
             RETURNING {ORDER_COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(status)
            .bind(id.as_uuid())
            .fetch_optional(self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(order)
    }
}
