//! Database operations for the back office.
//!
//! Both binaries share one `PostgreSQL` database. The admin side owns the
//! back-office tables and writes to the shop tables the storefront reads.
//!
//! ## Tables owned by admin migrations
//!
//! - `admin_users` - Admin accounts with bcrypt password hashes
//! - `admin_sessions` - Bearer session tokens
//! - `admin_activity_logs` - Audit trail of admin actions
//!
//! ## Shop tables written here
//!
//! - `products` - Catalog CRUD
//! - `orders` - Status updates, plus the customer aggregation reads
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p kotobcom-cli -- migrate admin
//! ```

pub mod activity_logs;
pub mod admin_users;
pub mod customers;
pub mod orders;
pub mod products;
pub mod sessions;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use activity_logs::ActivityLogRepository;
pub use admin_users::AdminUserRepository;
pub use customers::CustomerRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use sessions::SessionRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email, referenced product).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
