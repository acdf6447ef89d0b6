//! Integration tests for admin authentication.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p kotobcom-admin)
//! - A test admin account (ktc-cli admin create, see the crate docs)
//!
//! Run with: cargo test -p kotobcom-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use kotobcom_integration_tests::{admin_base_url, admin_login, http_client};

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and test admin account"]
async fn test_login_returns_token_and_admin() {
    let client = http_client();
    let base_url = admin_base_url();

    let token = admin_login(&client).await;
    uuid::Uuid::parse_str(&token).expect("token should be a UUID");

    // The token authenticates follow-up requests
    let resp = client
        .get(format!("{base_url}/auth/session"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to get session");
    assert_eq!(resp.status(), StatusCode::OK);

    let admin: Value = resp.json().await.expect("Failed to parse session");
    assert!(admin.get("email").is_some());
    // The password hash never leaves the server
    assert!(admin.get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_login_wrong_password_rejected() {
    let client = http_client();
    let base_url = admin_base_url();

    let email =
        std::env::var("ADMIN_TEST_EMAIL").unwrap_or_else(|_| "admin@example.com".to_owned());

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "email": email, "password": "Definitely-Wrong-Pass-1" }))
        .send()
        .await
        .expect("Failed to send login request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = resp.json().await.expect("Failed to parse error");
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_unknown_email_gets_same_answer_as_wrong_password() {
    let client = http_client();
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({
            "email": format!("nobody-{}@example.com", uuid::Uuid::new_v4()),
            "password": "Definitely-Wrong-Pass-1"
        }))
        .send()
        .await
        .expect("Failed to send login request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = resp.json().await.expect("Failed to parse error");
    assert_eq!(body["error"], "Invalid credentials");
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_protected_routes_require_token() {
    let client = http_client();
    let base_url = admin_base_url();

    for path in ["/auth/session", "/products", "/orders", "/customers"] {
        let resp = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("Failed to send unauthenticated request");
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "{path} should require a token"
        );
    }

    // A syntactically valid but unknown token is rejected the same way
    let resp = client
        .get(format!("{base_url}/products"))
        .bearer_auth(uuid::Uuid::new_v4())
        .send()
        .await
        .expect("Failed to send bogus-token request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server and test admin account"]
async fn test_logout_invalidates_token() {
    let client = http_client();
    let base_url = admin_base_url();

    let token = admin_login(&client).await;

    let resp = client
        .post(format!("{base_url}/auth/logout"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to log out");
    assert_eq!(resp.status(), StatusCode::OK);

    // The token no longer works
    let resp = client
        .get(format!("{base_url}/auth/session"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to get session");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Realtime Feed Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and test admin account"]
async fn test_event_stream_accepts_query_token() {
    let client = http_client();
    let base_url = admin_base_url();

    let token = admin_login(&client).await;

    // EventSource cannot set headers, so the token rides the query string
    let resp = client
        .get(format!("{base_url}/events?access_token={token}"))
        .send()
        .await
        .expect("Failed to open event stream");
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/event-stream"));
}
