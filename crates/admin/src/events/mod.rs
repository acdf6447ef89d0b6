//! Live change notifications.
//!
//! Database triggers emit a `pg_notify` on the `table_changes` channel for
//! every row change in the watched tables. One background task holds the
//! `LISTEN` connection and fans notifications out over a broadcast channel;
//! each SSE client gets its own receiver. If the database connection drops,
//! the task reconnects and clients simply miss the events in between, which
//! is fine because the dashboard refetches on every event anyway.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use sqlx::postgres::PgListener;
use tokio::sync::broadcast;
use tracing::{info, warn};
use uuid::Uuid;

/// The `pg_notify` channel the triggers write to.
const CHANNEL: &str = "table_changes";

/// Tables whose changes are published, and accepted by the SSE filter.
pub const WATCHED_TABLES: [&str; 4] =
    ["products", "orders", "admin_users", "admin_activity_logs"];

/// How long to wait before reattaching a dropped listener.
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// A row-level change in a watched table, as emitted by the triggers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Table the change happened in.
    pub table: String,
    /// `INSERT`, `UPDATE`, or `DELETE`.
    pub action: String,
    /// ID of the affected row.
    pub id: Uuid,
}

/// Fan-out hub for change events.
#[derive(Debug, Clone)]
pub struct EventBroadcaster {
    sender: broadcast::Sender<ChangeEvent>,
}

impl EventBroadcaster {
    /// Create a broadcaster buffering up to `capacity` events per receiver.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// A fresh receiver seeing events from this point on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all current receivers.
    ///
    /// Sending with no receivers connected is not an error; the event is
    /// simply dropped.
    pub fn send(&self, event: ChangeEvent) {
        let _ = self.sender.send(event);
    }
}

/// Hold the `LISTEN` connection and pump notifications into the broadcaster.
///
/// Runs until the process exits, reconnecting after transient database
/// failures. Spawn it once at startup.
pub async fn listen_for_changes(pool: PgPool, broadcaster: EventBroadcaster) {
    loop {
        if let Err(e) = run_listener(&pool, &broadcaster).await {
            warn!(error = %e, "change listener disconnected, reconnecting");
        }
        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}

async fn run_listener(pool: &PgPool, broadcaster: &EventBroadcaster) -> Result<(), sqlx::Error> {
    let mut listener = PgListener::connect_with(pool).await?;
    listener.listen(CHANNEL).await?;
    info!(channel = CHANNEL, "listening for table changes");

    loop {
        let notification = listener.recv().await?;
        match serde_json::from_str::<ChangeEvent>(notification.payload()) {
            Ok(event) => broadcaster.send(event),
            Err(e) => warn!(error = %e, "ignoring malformed change notification"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
