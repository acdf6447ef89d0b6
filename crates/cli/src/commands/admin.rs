//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create a new admin account
//! ktc-cli admin create -e admin@example.com -n "Admin Name" -p "a strong password"
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string

use secrecy::SecretString;
use thiserror::Error;

use kotobcom_admin::db::{self, AdminUserRepository, RepositoryError};
use kotobcom_core::{Email, validate_password};

/// Errors that can occur during admin account operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Connect(#[from] sqlx::Error),

    /// Invalid email address.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Display name is empty.
    #[error("Name must not be empty")]
    EmptyName,

    /// Password fails the policy.
    #[error("Password rejected: {0}")]
    WeakPassword(String),

    /// Password hashing failed.
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// An account with this email already exists.
    #[error("Admin account already exists with email: {0}")]
    UserExists(String),

    /// Database query error.
    #[error("Database error: {0}")]
    Database(RepositoryError),
}

/// Create a new admin account.
///
/// # Arguments
///
/// * `email` - Admin's email address
/// * `name` - Admin's display name
/// * `password` - Initial password, validated against the password policy
///
/// # Errors
///
/// Returns an error if validation fails, the email is already taken, or
/// the database is unreachable.
pub async fn create_user(email: &str, name: &str, password: &str) -> Result<(), AdminError> {
    dotenvy::dotenv().ok();

    let email = Email::parse(email).map_err(|_| AdminError::InvalidEmail(email.to_owned()))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(AdminError::EmptyName);
    }

    let validation = validate_password(password);
    if !validation.is_valid() {
        return Err(AdminError::WeakPassword(
            validation.into_errors().join(", "),
        ));
    }

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| AdminError::MissingEnvVar("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Creating admin account: {}", email);

    // Blocking is fine here, there is no async work to starve
    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    let admin = AdminUserRepository::new(&pool)
        .create(name, &email, &password_hash)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => AdminError::UserExists(email.to_string()),
            other => AdminError::Database(other),
        })?;

    tracing::info!(
        "Admin account created! ID: {}, Email: {}",
        admin.id,
        admin.email
    );

    Ok(())
}
