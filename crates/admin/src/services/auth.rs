//! Admin authentication service.
//!
//! Login is rate limited per email before credentials are even looked at,
//! and every failure mode after that reads the same to the client, so
//! neither account existence nor password wrongness leaks.

use std::time::Duration as StdDuration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use kotobcom_core::{Email, SessionToken, sanitize_input};

use crate::db::{AdminUserRepository, RepositoryError, SessionRepository};
use crate::models::CurrentAdmin;
use crate::services::SlidingWindowRateLimiter;

/// Errors from authentication.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The email's login window is exhausted.
    #[error("Too many login attempts. Try again in {minutes} minutes.")]
    RateLimited {
        /// Whole minutes until the window frees up.
        minutes: u64,
    },
    /// Unknown email or wrong password; deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Bcrypt rejected the stored hash.
    #[error("password verification failed")]
    Verify(#[source] bcrypt::BcryptError),
    /// The blocking verification task was cancelled or panicked.
    #[error("password verification task aborted")]
    VerifyTask(#[source] tokio::task::JoinError),
    /// Database failure.
    #[error(transparent)]
    Database(#[from] RepositoryError),
}

/// A successful login, as returned to the client.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: SessionToken,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// The authenticated admin.
    pub admin: CurrentAdmin,
}

/// Authentication service.
pub struct AuthService<'a> {
    admins: AdminUserRepository<'a>,
    sessions: SessionRepository<'a>,
    limiter: &'a SlidingWindowRateLimiter,
    session_timeout_hours: i64,
    window_minutes: u64,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(
        pool: &'a PgPool,
        limiter: &'a SlidingWindowRateLimiter,
        session_timeout_hours: i64,
        rate_window: StdDuration,
    ) -> Self {
        Self {
            admins: AdminUserRepository::new(pool),
            sessions: SessionRepository::new(pool),
            limiter,
            session_timeout_hours,
            window_minutes: (rate_window.as_secs() / 60).max(1),
        }
    }

    /// Authenticate an admin and issue a session token.
    ///
    /// The rate limit slot is consumed before credentials are checked, so
    /// failed logins burn attempts. Expired sessions belonging to the admin
    /// are swept as a side effect of a successful login.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::RateLimited` when the email's window is exhausted,
    /// `AuthError::InvalidCredentials` for unknown emails and wrong passwords
    /// alike, and `AuthError::Database` for storage failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let email_input = sanitize_input(email);
        let rate_key = format!("login_{}", email_input.to_lowercase());
        if !self.limiter.try_acquire(&rate_key) {
            info!("login rate limit hit");
            return Err(AuthError::RateLimited {
                minutes: self.window_minutes,
            });
        }

        // Identical answer for every credential failure; the log line is
        // where operators see lockout proximity.
        let invalid = || {
            info!(
                remaining_attempts = self.limiter.remaining_attempts(&rate_key),
                "failed login attempt"
            );
            AuthError::InvalidCredentials
        };

        // A malformed email can't match an account; same answer as an
        // unknown one.
        let Ok(email) = Email::parse(&email_input) else {
            return Err(invalid());
        };

        let Some(admin) = self.admins.find_by_email(&email).await? else {
            return Err(invalid());
        };

        // Bcrypt at our work factor takes long enough to matter on the
        // async runtime.
        let password = password.to_owned();
        let hash = admin.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(AuthError::VerifyTask)?
            .map_err(AuthError::Verify)?;
        if !valid {
            return Err(invalid());
        }

        self.sessions.delete_expired_for(admin.id).await?;

        let token = SessionToken::generate();
        let expires_at = Utc::now() + chrono::Duration::hours(self.session_timeout_hours);
        let session = self.sessions.create(admin.id, &token, expires_at).await?;

        info!(admin_id = %admin.id, "admin logged in");

        Ok(LoginResponse {
            token,
            expires_at: session.expires_at,
            admin: admin.to_current(),
        })
    }
}
