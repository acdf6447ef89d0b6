//! Session-related types.
//!
//! The storefront session carries anonymous shopping state only; there
//! are no customer accounts. Carts and the language preference live in
//! the `PostgreSQL`-backed session and survive page reloads for as long
//! as the session cookie does.

/// Session keys for storefront state.
pub mod keys {
    /// Key for the shopping cart ([`crate::models::Cart`]).
    pub const CART: &str = "cart";

    /// Key for the preferred display language ([`kotobcom_core::Language`]).
    pub const LANGUAGE: &str = "language";
}
