//! Storefront display language.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`Language`] from a string.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown language code: {0}")]
pub struct ParseLanguageError(pub String);

/// A storefront display language.
///
/// The store serves Tunisian customers in Arabic (the default), French,
/// and English. Arabic is rendered right-to-left.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic (right-to-left).
    #[default]
    Ar,
    /// French.
    Fr,
    /// English.
    En,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Self; 3] = [Self::Ar, Self::Fr, Self::En];

    /// Returns the two-letter ISO 639-1 code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Returns true when the language is written right-to-left.
    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Returns the text direction, `"rtl"` or `"ltr"`.
    #[must_use]
    pub const fn direction(&self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ar" => Ok(Self::Ar),
            "fr" => Ok(Self::Fr),
            "en" => Ok(Self::En),
            _ => Err(ParseLanguageError(s.to_owned())),
        }
    }
}
