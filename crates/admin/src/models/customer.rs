//! Customer aggregation types.
//!
//! There is no customers table: a "customer" is the distinct
//! (name, phone) pair aggregated from the orders they placed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kotobcom_core::PhoneNumber;

/// One customer, aggregated from their orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSummary {
    /// Customer name as entered at checkout.
    pub customer_name: String,
    /// Customer phone number.
    pub customer_phone: PhoneNumber,
    /// Street address from the customer's earliest order.
    pub customer_address: String,
    /// City from the customer's earliest order.
    pub customer_city: String,
    /// Number of orders placed.
    pub total_orders: u32,
    /// Sum of all order totals.
    pub total_spent: Decimal,
    /// When the most recent order was placed.
    pub last_order_date: DateTime<Utc>,
}

/// Aggregate statistics over the whole customer base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerStats {
    /// Number of distinct customers.
    pub total_customers: u32,
    /// Sum of all order totals.
    pub total_revenue: Decimal,
    /// Average order total, zero when there are no orders.
    pub avg_order_value: Decimal,
    /// Customers with more than one order.
    pub repeat_customers: u32,
}
