//! Customer phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneNumberError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input is shorter than the minimum length.
    #[error("phone number must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length (excluding a leading +).
        min: usize,
    },
    /// The input is longer than the maximum length.
    #[error("phone number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length (excluding a leading +).
        max: usize,
    },
    /// The input contains a character outside the allowed set.
    #[error("phone number contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// A customer phone number.
///
/// Accepts the loose formats customers actually type: an optional leading
/// `+`, then 8 to 20 characters drawn from digits, spaces, hyphens, and
/// parentheses. Tunisian numbers are typically `+216 XX XXX XXX` but no
/// country-specific shape is enforced.
///
/// ## Examples
///
/// ```
/// use kotobcom_core::PhoneNumber;
///
/// assert!(PhoneNumber::parse("+216 29 381 882").is_ok());
/// assert!(PhoneNumber::parse("29381882").is_ok());
/// assert!(PhoneNumber::parse("(216) 29-381-882").is_ok());
///
/// assert!(PhoneNumber::parse("1234567").is_err());   // too short
/// assert!(PhoneNumber::parse("29 38 18 8x").is_err()); // letters
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Minimum number of characters after the optional leading `+`.
    pub const MIN_LENGTH: usize = 8;

    /// Maximum number of characters after the optional leading `+`.
    pub const MAX_LENGTH: usize = 20;

    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, outside the 8-20 character
    /// range (not counting a leading `+`), or contains characters other
    /// than digits, spaces, hyphens, and parentheses.
    pub fn parse(s: &str) -> Result<Self, PhoneNumberError> {
        if s.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        let rest = s.strip_prefix('+').unwrap_or(s);

        let len = rest.chars().count();
        if len < Self::MIN_LENGTH {
            return Err(PhoneNumberError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        if len > Self::MAX_LENGTH {
            return Err(PhoneNumberError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        for c in rest.chars() {
            if !c.is_ascii_digit() && c != ' ' && c != '-' && c != '(' && c != ')' {
                return Err(PhoneNumberError::InvalidCharacter(c));
            }
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PhoneNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns only the digits of the number, dropping formatting.
    ///
    /// Useful when comparing numbers entered with different punctuation.
    #[must_use]
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for PhoneNumber {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for PhoneNumber {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for PhoneNumber {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_numbers() {
        assert!(PhoneNumber::parse("29381882").is_ok());
        assert!(PhoneNumber::parse("+21629381882").is_ok());
        assert!(PhoneNumber::parse("+216 29 381 882").is_ok());
        assert!(PhoneNumber::parse("(216) 29-381-882").is_ok());
        assert!(PhoneNumber::parse("00216 29381882").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(PhoneNumber::parse(""), Err(PhoneNumberError::Empty)));
    }

    #[test]
    fn test_parse_too_short() {
        assert!(matches!(
            PhoneNumber::parse("1234567"),
            Err(PhoneNumberError::TooShort { .. })
        ));
        // A leading + does not count toward the length
        assert!(matches!(
            PhoneNumber::parse("+1234567"),
            Err(PhoneNumberError::TooShort { .. })
        ));
    }

    #[test]
    fn test_parse_too_long() {
        assert!(matches!(
            PhoneNumber::parse("123456789012345678901"),
            Err(PhoneNumberError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_characters() {
        assert!(matches!(
            PhoneNumber::parse("2938188x"),
            Err(PhoneNumberError::InvalidCharacter('x'))
        ));
        assert!(matches!(
            PhoneNumber::parse("29.381.882"),
            Err(PhoneNumberError::InvalidCharacter('.'))
        ));
        // + is only allowed at the start
        assert!(matches!(
            PhoneNumber::parse("216+29381882"),
            Err(PhoneNumberError::InvalidCharacter('+'))
        ));
    }

    #[test]
    fn test_digits() {
        let phone = PhoneNumber::parse("+216 29-381-882").unwrap();
        assert_eq!(phone.digits(), "21629381882");
    }

    #[test]
    fn test_display_preserves_formatting() {
        let phone = PhoneNumber::parse("+216 29 381 882").unwrap();
        assert_eq!(format!("{phone}"), "+216 29 381 882");
    }

    #[test]
    fn test_serde_roundtrip() {
        let phone = PhoneNumber::parse("+21629381882").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+21629381882\"");

        let parsed: PhoneNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, phone);
    }
}
