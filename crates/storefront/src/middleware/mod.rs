//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with `PostgreSQL` store)
//! 4. CORS (only when allowed origins are configured)
//! 5. Rate limiting (governor)

pub mod rate_limit;
pub mod session;

pub use rate_limit::{api_rate_limiter, checkout_rate_limiter};
pub use session::create_session_layer;
