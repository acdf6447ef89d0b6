//! Core types for Kotobcom.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod language;
pub mod order_number;
pub mod phone;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use language::Language;
pub use order_number::{OrderNumber, OrderNumberError};
pub use phone::{PhoneNumber, PhoneNumberError};
pub use price::{Price, PriceError};
pub use status::*;
