//! In-memory sliding-window rate limiter.
//!
//! Used to throttle login attempts per email. Attempts are timestamps in a
//! window; a request is allowed while fewer than `limit` live timestamps
//! exist for its key. Rejected requests are not recorded, so hammering a
//! locked key never extends the lockout.
//!
//! State is per-process. With one admin instance that is the whole story;
//! with several, each instance enforces the limit independently.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Sliding-window rate limiter keyed by string.
#[derive(Debug)]
pub struct SlidingWindowRateLimiter {
    limit: usize,
    window: Duration,
    attempts: Mutex<HashMap<String, Vec<Instant>>>,
}

impl SlidingWindowRateLimiter {
    /// Create a limiter allowing `limit` attempts per `window`.
    #[must_use]
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            limit,
            window,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// Try to record an attempt for `key`.
    ///
    /// Returns `true` and records the attempt if the key is under its
    /// limit, `false` (recording nothing) otherwise.
    pub fn try_acquire(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut guard = self
            .attempts
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        // Sweep the whole map so keys nobody retries don't accumulate.
        guard.retain(|_, stamps| {
            stamps.retain(|stamp| now.duration_since(*stamp) < self.window);
            !stamps.is_empty()
        });

        let stamps = guard.entry(key.to_owned()).or_default();
        if stamps.len() >= self.limit {
            return false;
        }

        stamps.push(now);
        true
    }

    /// How many attempts `key` has left in the current window.
    pub fn remaining_attempts(&self, key: &str) -> usize {
        self.remaining_at(key, Instant::now())
    }

    fn remaining_at(&self, key: &str, now: Instant) -> usize {
        let guard = self
            .attempts
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let live = guard.get(key).map_or(0, |stamps| {
            stamps
                .iter()
                .filter(|stamp| now.duration_since(**stamp) < self.window)
                .count()
        });

        self.limit.saturating_sub(live)
    }
}

// =============================================================================
// Tests
// =============================================================================
