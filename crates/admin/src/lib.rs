//! Kotobcom Admin library.
//!
//! This crate provides the back-office functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Security
//!
//! This crate contains HIGH PRIVILEGE access:
//! - Full catalog and order management
//! - Admin account management
//! - The audit trail of every admin action
//!
//! Only deploy on network-restricted infrastructure; it is not meant to be
//! reachable from the public internet.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
