//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (database ping)
//!
//! # Auth
//! POST /auth/login              - Email/password login, issues a bearer token
//! GET  /auth/session            - Current admin for the presented token
//! POST /auth/logout             - Revoke the presented token
//!
//! # Catalog
//! GET    /products              - Full catalog, newest first
//! POST   /products              - Create a product
//! PUT    /products/{id}         - Full update
//! DELETE /products/{id}         - Delete (409 when referenced by orders)
//!
//! # Orders
//! GET /orders                   - All orders with their items
//! PUT /orders/{id}/status       - Set fulfilment status
//!
//! # Customers (derived from orders)
//! GET /customers                - Per-customer summaries (?search=)
//! GET /customers/stats          - Aggregate stats
//!
//! # Accounts and audit
//! GET    /admin-users           - List admin accounts
//! POST   /admin-users           - Create an admin account
//! DELETE /admin-users/{id}      - Delete an account (403 for your own)
//! GET    /activity-logs         - Recent audit entries (?limit=)
//!
//! # Realtime
//! GET /events                   - SSE change feed (?table=, ?access_token=)
//! ```
//!
//! Authentication is enforced per handler by the `RequireAdminAuth`
//! extractor; only `/auth/login` and the health endpoints are public.

pub mod activity_logs;
pub mod admin_users;
pub mod auth;
pub mod customers;
pub mod events;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Create all routes for the admin API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/session", get(auth::session))
        .route("/auth/logout", post(auth::logout))
        .route("/products", get(products::index).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::destroy),
        )
        .route("/orders", get(orders::index))
        .route("/orders/{id}/status", put(orders::update_status))
        .route("/customers", get(customers::index))
        .route("/customers/stats", get(customers::stats))
        .route(
            "/admin-users",
            get(admin_users::index).post(admin_users::create),
        )
        .route("/admin-users/{id}", delete(admin_users::destroy))
        .route("/activity-logs", get(activity_logs::index))
        .route("/events", get(events::subscribe))
}
