//! Order repository for checkout and tracking.

use sqlx::PgPool;

use kotobcom_core::{OrderId, OrderItemId, OrderNumber, Price, ProductId};

use super::RepositoryError;
use crate::models::{NewOrder, Order, TrackedOrderItem};

const ORDER_COLUMNS: &str = "id, order_number, customer_name, customer_phone, \
     customer_address, customer_city, total_amount, status, created_at, updated_at";

/// Internal row type for order item tracking queries.
#[derive(Debug, sqlx::FromRow)]
struct TrackedOrderItemRow {
    id: OrderItemId,
    product_id: ProductId,
    title: String,
    title_ar: String,
    title_fr: String,
    image_url: Option<String>,
    quantity: i32,
    price: Price,
}

impl TryFrom<TrackedOrderItemRow> for TrackedOrderItem {
    type Error = RepositoryError;

    fn try_from(row: TrackedOrderItemRow) -> Result<Self, Self::Error> {
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

    /// Create an order together with its lines, atomically.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the order number already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new_order: &NewOrder) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "INSERT INTO orders \
             (order_number, customer_name, customer_phone, customer_address, customer_city, total_amount) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {ORDER_COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(new_order.order_number.as_str())
            .bind(&new_order.customer_name)
            .bind(new_order.customer_phone.as_str())
            .bind(&new_order.customer_address)
            .bind(&new_order.customer_city)
            .bind(new_order.total_amount.as_decimal())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Conflict("order number already exists".to_owned());
                }
                RepositoryError::Database(e)
            })?;

        for item in &new_order.items {
            let quantity = i32::try_from(item.quantity).map_err(|_| {
                RepositoryError::DataCorruption(format!(
                    "quantity exceeds integer range: {}",
                    item.quantity
                ))
            })?;

            sqlx::query(
                "INSERT INTO order_items (id, order_id, product_id, quantity, price) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(item.id.as_uuid())
            .bind(order.id.as_uuid())
            .bind(item.product_id.as_uuid())
            .bind(quantity)
            .bind(item.price.as_decimal())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(order)
    }

    /// Look up an order by its human-facing order number.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_number(
        &self,
        order_number: &OrderNumber,
    ) -> Result<Option<Order>, RepositoryError> {
        let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE order_number = $1");
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(order_number.as_str())
            .fetch_optional(self.pool)
            .await?;

        Ok(order)
    }

    /// List an order's lines joined with the catalog's title variants.
    ///
    /// Products referenced by order lines cannot be deleted (the foreign
    /// key restricts it), so the join always resolves.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored quantity is invalid.
    pub async fn list_items_with_products(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<TrackedOrderItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, TrackedOrderItemRow>(
            "SELECT oi.id, oi.product_id, p.title, p.title_ar, p.title_fr, p.image_url, \
             oi.quantity, oi.price \
             FROM order_items oi \
             JOIN products p ON p.id = oi.product_id \
             WHERE oi.order_id = $1 \
             ORDER BY oi.created_at",
        )
        .bind(order_id.as_uuid())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
