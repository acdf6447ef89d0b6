//! Cart route handlers.
//!
//! The cart lives in the server-side session; every mutation responds
//! with the refreshed cart view so clients never track state themselves.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use kotobcom_core::{Price, ProductId};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::{Cart, Product, session_keys};
use crate::state::AppState;

/// One cart line joined with live product data.
#[derive(Debug, Serialize)]
pub struct CartItemView {
    /// The product, with all language variants.
    pub product: Product,
    /// Number of copies in the cart.
    pub quantity: u32,
    /// Live price times quantity.
    pub line_total: Price,
}

/// The cart as returned to clients.
#[derive(Debug, Serialize)]
pub struct CartView {
    /// Cart lines whose products still exist.
    pub items: Vec<CartItemView>,
    /// Sum of line totals.
    pub total: Price,
    /// Total number of copies (the cart badge count).
    pub count: u32,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session, empty if none was stored yet.
async fn get_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Store the cart in the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Join the cart against live product data.
///
/// Lines whose product was deleted are dropped from the view; the first
/// checkout attempt prunes them from the stored cart as well.
async fn build_view(state: &AppState, cart: &Cart) -> Result<CartView> {
    let ids: Vec<ProductId> = cart.items().iter().map(|item| item.product_id).collect();
    let products = ProductRepository::new(state.pool())
        .get_many_by_ids(&ids)
        .await?;

    let mut items = Vec::with_capacity(cart.items().len());
    let mut total = Price::ZERO;

    for cart_item in cart.items() {
        let Some(product) = products.iter().find(|p| p.id == cart_item.product_id) else {
            continue;
        };

        let line_total = product
            .price
            .checked_mul_quantity(cart_item.quantity)
            .ok_or_else(|| AppError::Internal("cart line total out of range".to_owned()))?;
        total = total
            .checked_add(line_total)
            .ok_or_else(|| AppError::Internal("cart total out of range".to_owned()))?;

        items.push(CartItemView {
            product: product.clone(),
            quantity: cart_item.quantity,
            line_total,
        });
    }

    let count = items
        .iter()
        .fold(0_u32, |sum, item| sum.saturating_add(item.quantity));

    Ok(CartView {
        items,
        total,
        count,
    })
}

// =============================================================================
// Handlers
// =============================================================================

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
pub struct AddItemBody {
    /// The product to add.
    pub product_id: ProductId,
    /// Copies to add; defaults to 1.
    pub quantity: Option<u32>,
}

/// Set-quantity request body.
///
/// Signed on the wire: zero and negative values remove the line.
#[derive(Debug, Deserialize)]
pub struct SetQuantityBody {
    /// The new quantity for the line.
    pub quantity: i64,
}

/// Display the cart joined with live product data.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let cart = get_cart(&session).await?;
    let view = build_view(&state, &cart).await?;
    Ok(Json(view))
}

/// Add a product to the cart.
///
/// Verifies the product exists and is in stock; increments the existing
/// line when the product is already in the cart.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AddItemBody>,
) -> Result<Json<CartView>> {
    let quantity = body.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::BadRequest(
            "quantity must be at least 1".to_owned(),
        ));
    }

    let product = ProductRepository::new(state.pool())
        .get_by_id(body.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("product not found".to_owned()))?;

    if !product.in_stock {
        return Err(AppError::Conflict("product is out of stock".to_owned()));
    }

    let mut cart = get_cart(&session).await?;
    cart.add(product.id, quantity);
    save_cart(&session, &cart).await?;

    let view = build_view(&state, &cart).await?;
    Ok(Json(view))
}

/// Set a line's quantity. Zero or negative removes the line; a product
/// that is not in the cart is left alone.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<ProductId>,
    Json(body): Json<SetQuantityBody>,
) -> Result<Json<CartView>> {
    let quantity = u32::try_from(body.quantity.max(0)).unwrap_or(u32::MAX);

    let mut cart = get_cart(&session).await?;
    cart.set_quantity(product_id, quantity);
    save_cart(&session, &cart).await?;

    let view = build_view(&state, &cart).await?;
    Ok(Json(view))
}

/// Remove a line from the cart.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<ProductId>,
) -> Result<Json<CartView>> {
    let mut cart = get_cart(&session).await?;
    cart.remove(product_id);
    save_cart(&session, &cart).await?;

    let view = build_view(&state, &cart).await?;
    Ok(Json(view))
}

/// Clear the cart.
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let mut cart = get_cart(&session).await?;
    cart.clear();
    save_cart(&session, &cart).await?;

    let view = build_view(&state, &cart).await?;
    Ok(Json(view))
}
