//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - Readiness check (database ping)
//!
//! # Catalog
//! GET  /api/products                    - Product listing (filter, search, sort)
//! GET  /api/products/{id}               - Product detail
//!
//! # Cart (session-backed)
//! GET    /api/cart                      - Cart joined with live product data
//! DELETE /api/cart                      - Clear the cart
//! POST   /api/cart/items                - Add a product (increments existing lines)
//! PATCH  /api/cart/items/{product_id}   - Set line quantity (0 removes)
//! DELETE /api/cart/items/{product_id}   - Remove a line
//!
//! # Checkout and tracking (strict rate limit)
//! POST /api/checkout                    - Place order, returns the WhatsApp handoff
//! GET  /api/orders/track                - Look up an order by number and phone
//!
//! # Localization
//! GET /api/language                     - Session language preference
//! PUT /api/language                     - Set session language preference
//! GET /api/i18n/{lang}                  - Full message table for a language
//! ```

pub mod cart;
pub mod checkout;
pub mod language;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::middleware::{api_rate_limiter, checkout_rate_limiter};
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).delete(cart::clear))
        .route("/items", post(cart::add))
        .route(
            "/items/{product_id}",
            patch(cart::update).delete(cart::remove),
        )
}

/// Create the language and i18n routes router.
pub fn language_routes() -> Router<AppState> {
    Router::new()
        .route("/language", get(language::show).put(language::set))
        .route("/i18n/{lang}", get(language::messages))
}

/// Create all routes for the storefront.
///
/// Checkout and order tracking sit behind the strict rate limiter; the
/// rest of the API uses the relaxed one.
pub fn routes() -> Router<AppState> {
    let guarded = Router::new()
        .route("/checkout", post(checkout::place_order))
        .route("/orders/track", get(orders::track))
        .layer(checkout_rate_limiter());

    let api = Router::new()
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .merge(language_routes())
        .layer(api_rate_limiter())
        .merge(guarded);

    Router::new().nest("/api", api)
}
