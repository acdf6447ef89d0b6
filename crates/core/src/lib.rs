//! Kotobcom Core - Shared types library.
//!
//! This crate provides common types used across all Kotobcom components:
//! - `storefront` - Public-facing bookstore API
//! - `admin` - Internal back-office API
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, phone
//!   numbers, and status enums
//! - [`sanitize`] - Untrusted-input cleanup shared by both services
//! - [`password`] - Password strength rules for admin accounts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod password;
pub mod sanitize;
pub mod types;

pub use password::{PasswordValidation, validate_password};
pub use sanitize::sanitize_input;
pub use types::*;
