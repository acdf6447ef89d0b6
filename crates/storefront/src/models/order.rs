//! Order models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kotobcom_core::{OrderId, OrderItemId, OrderNumber, OrderStatus, PhoneNumber, Price, ProductId};

/// A customer order.
///
/// Orders are paid cash on delivery; there is no payment state beyond
/// the fulfilment [`OrderStatus`]. The customer is identified by the
/// contact details captured at checkout, not by an account.
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

/// An order line joined with the catalog's title variants.
///
/// `price` is the unit price snapshotted at checkout; later catalog
/// price changes do not affect existing orders. Products referenced by
/// order lines cannot be deleted, so the titles always resolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedOrderItem {
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

/// Data for creating a new order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Generated order number.
    pub order_number: OrderNumber,
    /// Customer's name (already sanitized).
    pub customer_name: String,
    /// Customer's phone number.
    pub customer_phone: PhoneNumber,
    /// Delivery street address (already sanitized).
    pub customer_address: String,
    /// Delivery city (already sanitized).
    pub customer_city: String,
    /// Order total.
    pub total_amount: Price,
    /// Order lines with price snapshots.
    pub items: Vec<NewOrderItem>,
}

/// One line of a new order.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    /// Line ID, generated at checkout so the response can echo it.
    pub id: OrderItemId,
    /// The ordered product.
    pub product_id: ProductId,
    /// Number of copies.
    pub quantity: u32,
    /// Unit price snapshotted from the catalog.
    pub price: Price,
}
