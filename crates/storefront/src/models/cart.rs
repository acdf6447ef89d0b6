//! Shopping cart model.
//!
//! The cart is stored in the server-side session as a list of product
//! references with quantities. Prices are never stored here; they are
//! looked up from the catalog when the cart is displayed and snapshotted
//! into the order at checkout.

use serde::{Deserialize, Serialize};

use kotobcom_core::ProductId;

/// Upper bound on a single line's quantity.
pub const MAX_QUANTITY: u32 = 999;

/// One line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// The product being bought.
    pub product_id: ProductId,
    /// How many copies. Always at least 1; a line at 0 is removed.
    pub quantity: u32,
}

/// An anonymous shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Add `quantity` copies of a product.
    ///
    /// If the product is already in the cart its quantity is increased,
    /// otherwise a new line is appended. Quantities saturate at
    /// [`MAX_QUANTITY`].
    pub fn add(&mut self, product_id: ProductId, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = item.quantity.saturating_add(quantity).min(MAX_QUANTITY);
        } else {
            self.items.push(CartItem {
                product_id,
                quantity: quantity.min(MAX_QUANTITY),
            });
        }
    }

    /// Set a line's quantity. A quantity of 0 removes the line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity.min(MAX_QUANTITY);
        }
    }

    /// Remove a line from the cart.
    pub fn remove(&mut self, product_id: ProductId) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Drop lines whose products no longer exist in the catalog.
    pub fn retain_products(&mut self, exists: impl Fn(ProductId) -> bool) {
        self.items.retain(|i| exists(i.product_id));
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of copies across all lines (the cart badge count).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |sum, i| sum.saturating_add(i.quantity))
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// True when the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
