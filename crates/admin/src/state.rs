//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AdminConfig;
use crate::events::EventBroadcaster;
use crate::services::SlidingWindowRateLimiter;

/// Events buffered per SSE subscriber before it starts lagging.
const EVENT_BUFFER: usize = 256;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    pool: PgPool,
    events: EventBroadcaster,
    login_limiter: SlidingWindowRateLimiter,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Admin configuration
    /// * `pool` - `PostgreSQL` connection pool
    #[must_use]
    pub fn new(config: AdminConfig, pool: PgPool) -> Self {
        let events = EventBroadcaster::new(EVENT_BUFFER);
        let login_limiter =
            SlidingWindowRateLimiter::new(config.login_rate_limit, config.login_rate_window);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                events,
                login_limiter,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the change event broadcaster.
    #[must_use]
    pub fn events(&self) -> &EventBroadcaster {
        &self.inner.events
    }

    /// Get a reference to the login rate limiter.
    #[must_use]
    pub fn login_limiter(&self) -> &SlidingWindowRateLimiter {
        &self.inner.login_limiter
    }
}
