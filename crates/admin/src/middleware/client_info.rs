//! Client origin extraction for the audit trail.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{header, request::Parts};

/// Client network details recorded with audit log entries.
///
/// Never fails; fields are `None` when nothing usable was presented.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    /// Best-effort client IP, honoring proxy headers.
    pub ip_address: Option<String>,
    /// The client's User-Agent header.
    pub user_agent: Option<String>,
}

impl<S> FromRequestParts<S> for ClientInfo
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip_address = client_ip(parts);
        let user_agent = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Ok(Self {
            ip_address,
            user_agent,
        })
    }
}

/// The client IP as the reverse proxy saw it.
///
/// `X-Forwarded-For` carries the original client in its leftmost entry;
/// `X-Real-IP` is the single-hop variant. The socket peer address is the
/// last resort and requires the server to run with connect info.
fn client_ip(parts: &Parts) -> Option<String> {
    if let Some(value) = parts.headers.get("x-forwarded-for")
        && let Ok(value) = value.to_str()
        && let Some(first) = value.split(',').next()
    {
        let first = first.trim();
        if !first.is_empty() {
            return Some(first.to_owned());
        }
    }

    if let Some(value) = parts.headers.get("x-real-ip")
        && let Ok(value) = value.to_str()
    {
        return Some(value.trim().to_owned());
    }

    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}

// =============================================================================
// Tests
// =============================================================================
