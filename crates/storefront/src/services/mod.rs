//! Business logic services for storefront.
//!
//! # Services
//!
//! - `catalog` - Cached catalog reads with filtering and sorting
//! - `checkout` - Order placement and the merchant WhatsApp handoff

pub mod catalog;
pub mod checkout;

pub use catalog::{CatalogService, ProductFilter, ProductSort};
pub use checkout::{CheckoutError, CheckoutService, CustomerDetails, PlacedOrder};
