//! Checkout route handler.

use axum::{Json, extract::State};
use tower_sessions::Session;
use tracing::instrument;

use kotobcom_core::Language;

use crate::error::Result;
use crate::models::{Cart, session_keys};
use crate::services::{CheckoutError, CheckoutService, CustomerDetails, PlacedOrder};
use crate::state::AppState;

/// Place an order from the session cart.
///
/// On success the session cart is cleared and the response carries the
/// persisted order plus the merchant WhatsApp link; the client renders
/// its confirmation page from this payload.
///
/// When a cart line's product has been deleted since it was added, the
/// dead lines are pruned from the stored cart along with the 409, so a
/// retry goes through with what remains.
#[instrument(skip(state, session, body))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CustomerDetails>,
) -> Result<Json<PlacedOrder>> {
    let mut cart = session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default();
    let language = session
        .get::<Language>(session_keys::LANGUAGE)
        .await?
        .unwrap_or_default();

    let service = CheckoutService::new(state.pool(), &state.config().whatsapp_phone);
    let placed = match service.place_order(&cart, &body, language).await {
        Ok(placed) => placed,
        Err(CheckoutError::ProductUnavailable(missing)) => {
            cart.retain_products(|id| !missing.contains(&id));
            if let Err(e) = session.insert(session_keys::CART, &cart).await {
                tracing::warn!("Failed to prune unavailable products from cart: {e}");
            }
            return Err(CheckoutError::ProductUnavailable(missing).into());
        }
        Err(e) => return Err(e.into()),
    };

    // The order exists at this point; failing to clear the cart must not
    // undo a successful checkout.
    if let Err(e) = session.remove::<Cart>(session_keys::CART).await {
        tracing::warn!("Failed to clear cart after checkout: {e}");
    }

    Ok(Json(placed))
}
