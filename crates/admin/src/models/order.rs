//! Order types as seen from the back office.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kotobcom_core::{OrderId, OrderItemId, OrderNumber, OrderStatus, PhoneNumber, Price, ProductId};

/// A customer order.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    /// Order ID.
    pub id: OrderId,
    /// Human-facing order number quoted by the customer.
    pub order_number: OrderNumber,
    /// Customer's name as entered at checkout.
    pub customer_name: String,
    /// Customer's phone number.
    pub customer_phone: PhoneNumber,
    /// Delivery street address.
    pub customer_address: String,
    /// Delivery city.
    pub customer_city: String,
    /// Order total at the time of checkout.
    pub total_amount: Price,
    /// Fulfilment status.
    pub status: OrderStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp (status changes).
    pub updated_at: DateTime<Utc>,
}

/// An order line joined with the catalog's title variants and image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDetail {
    /// Order line ID.
    pub id: OrderItemId,
    /// The ordered product.
    pub product_id: ProductId,
    /// English title.
    pub title: String,
    /// Arabic title.
    pub title_ar: String,
    /// French title.
    pub title_fr: String,
    /// Cover image URL, if the product has one.
    pub image_url: Option<String>,
    /// Number of copies ordered.
    pub quantity: u32,
    /// Unit price at checkout time.
    pub price: Price,
}

/// An order together with its lines, for the back-office order list.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    /// The order itself.
    pub order: Order,
    /// Its lines, joined with product details.
    pub items: Vec<OrderItemDetail>,
}
