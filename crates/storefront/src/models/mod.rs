//! Domain models for the storefront.

pub mod cart;
pub mod order;
pub mod product;
pub mod session;

pub use cart::{Cart, CartItem};
pub use order::{NewOrder, NewOrderItem, Order, TrackedOrderItem};
pub use product::Product;
pub use session::keys as session_keys;
