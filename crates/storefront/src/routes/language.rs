//! Language preference and i18n route handlers.
//!
//! The language preference rides the session next to the cart. The i18n
//! endpoint serves the full message table so the thin client can render
//! without shipping its own copies.

use axum::{Json, extract::Path};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use kotobcom_core::Language;

use crate::error::Result;
use crate::i18n;
use crate::models::session_keys;

/// The session language payload, for both directions.
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagePayload {
    /// The language code.
    pub language: Language,
}

/// A language's full message table.
#[derive(Debug, Serialize)]
pub struct MessagesPayload {
    /// The language code.
    pub language: Language,
    /// Text direction, `rtl` or `ltr`.
    pub dir: &'static str,
    /// Message key to translated string.
    pub messages: serde_json::Map<String, serde_json::Value>,
}

/// Get the session language preference. Defaults to Arabic.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<LanguagePayload>> {
    let language = session
        .get::<Language>(session_keys::LANGUAGE)
        .await?
        .unwrap_or_default();

    Ok(Json(LanguagePayload { language }))
}

/// Set the session language preference.
#[instrument(skip(session))]
pub async fn set(
    session: Session,
    Json(body): Json<LanguagePayload>,
) -> Result<Json<LanguagePayload>> {
    session
        .insert(session_keys::LANGUAGE, body.language)
        .await?;

    Ok(Json(LanguagePayload {
        language: body.language,
    }))
}

/// Full message table for a language.
#[instrument]
pub async fn messages(Path(lang): Path<Language>) -> Json<MessagesPayload> {
    let messages = i18n::table(lang)
        .iter()
        .map(|(key, value)| ((*key).to_owned(), serde_json::Value::from(*value)))
        .collect();

    Json(MessagesPayload {
        language: lang,
        dir: lang.direction(),
        messages,
    })
}
