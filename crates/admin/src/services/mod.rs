//! Business logic services for admin.
//!
//! # Services
//!
//! - `audit` - Best-effort activity log recording
//! - `auth` - Email/password login with bearer session tokens
//! - `rate_limit` - Sliding-window login throttle

pub mod audit;
pub mod auth;
pub mod rate_limit;

pub use audit::AuditService;
pub use auth::{AuthError, AuthService, LoginResponse};
pub use rate_limit::SlidingWindowRateLimiter;
