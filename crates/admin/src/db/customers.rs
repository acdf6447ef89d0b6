//! Customer aggregation queries.
//!
//! There is no customers table; customers are derived from orders by
//! grouping on (name, phone). Aggregates are computed over the whole
//! group before any search filter applies, so a matching customer always
//! shows their full order history.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use kotobcom_core::PhoneNumber;

use super::RepositoryError;
use crate::models::{CustomerStats, CustomerSummary};

/// Internal row type for customer summary queries.
#[derive(Debug, sqlx::FromRow)]
struct CustomerSummaryRow {
    customer_name: String,
    customer_phone: PhoneNumber,
    customer_address: String,
    customer_city: String,
    total_orders: i64,
    total_spent: Decimal,
    last_order_date: DateTime<Utc>,
}

impl TryFrom<CustomerSummaryRow> for CustomerSummary {
    type Error = RepositoryError;

    fn try_from(row: CustomerSummaryRow) -> Result<Self, Self::Error> {
        let total_orders = u32::try_from(row.total_orders).map_err(|_| {
            RepositoryError::DataCorruption(format!("invalid order count: {}", row.total_orders))
        })?;

        Ok(Self {
            customer_name: row.customer_name,
            customer_phone: row.customer_phone,
            customer_address: row.customer_address,
            customer_city: row.customer_city,
            total_orders,
            total_spent: row.total_spent,
            last_order_date: row.last_order_date,
        })
    }
}

/// Internal row type for the aggregate stats query.
#[derive(Debug, sqlx::FromRow)]
struct CustomerStatsRow {
    total_customers: i64,
    total_revenue: Decimal,
    total_orders: i64,
    repeat_customers: i64,
}

const PER_CUSTOMER_CTE: &str = "WITH per_customer AS ( \
     SELECT customer_name, customer_phone, \
            (array_agg(customer_address ORDER BY created_at))[1] AS customer_address, \
            (array_agg(customer_city ORDER BY created_at))[1] AS customer_city, \
            COUNT(*) AS total_orders, \
            SUM(total_amount) AS total_spent, \
            MAX(created_at) AS last_order_date \
     FROM orders \
     GROUP BY customer_name, customer_phone \
     )";

/// Repository for derived customer data.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List customer summaries, most recently active first.
    ///
    /// When `search` is given, summaries are filtered case-insensitively
    /// on name, phone, and earliest city.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored count is invalid.
    pub async fn summaries(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<CustomerSummary>, RepositoryError> {
        let rows = if let Some(term) = search {
            let query = format!(
                "{PER_CUSTOMER_CTE} \
                 SELECT customer_name, customer_phone, customer_address, customer_city, \
                        total_orders, total_spent, last_order_date \
                 FROM per_customer \
                 WHERE customer_name ILIKE $1 \
                    OR customer_phone ILIKE $1 \
                    OR customer_city ILIKE $1 \
                 ORDER BY last_order_date DESC"
            );
            sqlx::query_as::<_, CustomerSummaryRow>(&query)
                .bind(format!("%{term}%"))
                .fetch_all(self.pool)
                .await?
        } else {
            let query = format!(
                "{PER_CUSTOMER_CTE} \
                 SELECT customer_name, customer_phone, customer_address, customer_city, \
                        total_orders, total_spent, last_order_date \
                 FROM per_customer \
                 ORDER BY last_order_date DESC"
            );
            sqlx::query_as::<_, CustomerSummaryRow>(&query)
                .fetch_all(self.pool)
                .await?
        };

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Aggregate stats across the whole customer base.
    ///
    /// The average order value is computed here rather than in SQL so the
    /// zero-orders case stays an explicit zero instead of a NULL.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored count is invalid.
    pub async fn stats(&self) -> Result<CustomerStats, RepositoryError> {
        // SUM over BIGINT widens to NUMERIC in Postgres; cast back down.
        let query = format!(
            "{PER_CUSTOMER_CTE} \
             SELECT COUNT(*) AS total_customers, \
                    COALESCE(SUM(total_spent), 0) AS total_revenue, \
                    COALESCE(SUM(total_orders), 0)::BIGINT AS total_orders, \
                    COUNT(*) FILTER (WHERE total_orders > 1) AS repeat_customers \
             FROM per_customer"
        );
        let row = sqlx::query_as::<_, CustomerStatsRow>(&query)
            .fetch_one(self.pool)
            .await?;

        let total_customers = u32::try_from(row.total_customers).map_err(|_| {
            RepositoryError::DataCorruption(format!(
                "invalid customer count: {}",
                row.total_customers
            ))
        })?;
        let repeat_customers = u32::try_from(row.repeat_customers).map_err(|_| {
            RepositoryError::DataCorruption(format!(
                "invalid repeat customer count: {}",
                row.repeat_customers
            ))
        })?;

        let avg_order_value = if row.total_orders > 0 {
            (row.total_revenue / Decimal::from(row.total_orders)).round_dp(2)
        } else {
            Decimal::ZERO
        };

        Ok(CustomerStats {
            total_customers,
            total_revenue: row.total_revenue,
            avg_order_value,
            repeat_customers,
        })
    }
}
