//! Integration tests for Kotobcom.
//!
//! Every test here talks to running servers over HTTP, so they are all
//! marked `#[ignore]` and skipped by a plain `cargo test`.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply both migration sets
//! cargo run -p kotobcom-cli -- migrate all
//!
//! # Create the test admin account and seed a few products
//! cargo run -p kotobcom-cli -- admin create \
//!     -e admin@example.com -n "Test Admin" -p "Kotobcom-Dev-123"
//! cargo run -p kotobcom-cli -- seed --file products.yaml
//!
//! # Start both servers, then run the tests
//! cargo test -p kotobcom-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_BASE_URL` - storefront server (default `http://localhost:3000`)
//! - `ADMIN_BASE_URL` - admin server (default `http://localhost:3001`)
//! - `ADMIN_TEST_EMAIL` / `ADMIN_TEST_PASSWORD` - an existing admin account
//!   for the authenticated tests (defaults match the setup above)

use reqwest::Client;
use serde_json::json;

/// Base URL for the storefront API.
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

/// Base URL for the admin API.
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_owned())
}

/// HTTP client with a cookie store, for session-backed storefront flows.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn http_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Log in to the admin API and return the bearer token.
///
/// # Panics
///
/// Panics if the login request fails; authenticated tests cannot run
/// without a session. Set `ADMIN_TEST_EMAIL` / `ADMIN_TEST_PASSWORD` to
/// match an existing account.
pub async fn admin_login(client: &Client) -> String {
    let base_url = admin_base_url();
    let email =
        std::env::var("ADMIN_TEST_EMAIL").unwrap_or_else(|_| "admin@example.com".to_owned());
    let password =
        std::env::var("ADMIN_TEST_PASSWORD").unwrap_or_else(|_| "Kotobcom-Dev-123".to_owned());

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send login request");

    assert!(
        resp.status().is_success(),
        "Login failed with status {}; set ADMIN_TEST_EMAIL / ADMIN_TEST_PASSWORD",
        resp.status()
    );

    let body: serde_json::Value = resp.json().await.expect("Failed to parse login response");
    body.get("token")
        .and_then(|token| token.as_str())
        .expect("Login response missing token")
        .to_owned()
}
