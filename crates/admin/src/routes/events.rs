//! Realtime change feed over Server-Sent Events.
//!
//! The dashboard opens one `EventSource` per view and refetches whenever an
//! event for its table arrives, so delivery here is best-effort by design.

use std::convert::Infallible;

use async_stream::stream;
use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;
use tracing::instrument;

use crate::error::AppError;
use crate::events::WATCHED_TABLES;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Event stream query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    /// Restrict the stream to one watched table.
    pub table: Option<String>,
}

/// Subscribe to change events as they happen.
///
/// `EventSource` cannot set headers, so these clients authenticate with the
/// `access_token` query parameter instead.
#[instrument(skip(state, _admin))]
pub async fn subscribe(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Query(query): Query<EventsQuery>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    if let Some(table) = &query.table {
        if !WATCHED_TABLES.contains(&table.as_str()) {
            return Err(AppError::BadRequest(format!("unknown table: {table}")));
        }
    }

    let filter = query.table;
    let mut rx = state.events().subscribe();

    let stream = stream! {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if let Some(table) = filter.as_deref() {
                        if event.table != table {
                            continue;
                        }
                    }
                    match Event::default().json_data(&event) {
                        Ok(sse_event) => yield Ok(sse_event),
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to serialize change event");
                        }
                    }
                }
                // A lagged subscriber missed events; the client refetches on
                // the next one it sees, so skip ahead rather than close.
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "event subscriber lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    };

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
