//! Request extractors for the admin API.
//!
//! Authentication is per-handler via the [`RequireAdminAuth`] extractor
//! rather than a router-level guard, so public routes (login, health) need
//! no carve-outs.

pub mod auth;
pub mod client_info;

pub use auth::{BearerToken, RequireAdminAuth};
pub use client_info::ClientInfo;
