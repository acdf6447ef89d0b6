//! Human-facing order number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`OrderNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum OrderNumberError {
    /// The input string is empty.
    #[error("order number cannot be empty")]
    Empty,
    /// The input does not start with the `KTC-` prefix.
    #[error("order number must start with {prefix}")]
    MissingPrefix {
        /// The required prefix.
        prefix: &'static str,
    },
    /// The part after the prefix is not a run of digits.
    #[error("order number must be {prefix} followed by digits")]
    InvalidDigits {
        /// The required prefix.
        prefix: &'static str,
    },
}

/// A human-facing order number like `KTC-1735689600000`.
///
/// Order numbers are what customers quote when tracking an order or
/// contacting the store over WhatsApp. They are generated from the
/// creation timestamp in milliseconds, which keeps them unique in
/// practice at this store's order volume and lets staff read the
/// order date straight off the number.
///
/// Internally orders are keyed by [`OrderId`](crate::OrderId); the order
/// number is a lookup alias, not the primary key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Prefix for all order numbers.
    pub const PREFIX: &'static str = "KTC-";

    /// Generate a new order number from the current time.
    #[must_use]
    pub fn generate() -> Self {
        Self::from_timestamp_millis(chrono::Utc::now().timestamp_millis())
    }

    /// Build an order number from a millisecond timestamp.
    #[must_use]
    pub fn from_timestamp_millis(millis: i64) -> Self {
        Self(format!("{}{millis}", Self::PREFIX))
    }

    /// Parse an `OrderNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, lacks the `KTC-` prefix,
    /// or the prefix is not followed by at least one digit.
    pub fn parse(s: &str) -> Result<Self, OrderNumberError> {
        if s.is_empty() {
            return Err(OrderNumberError::Empty);
        }

        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or(OrderNumberError::MissingPrefix {
                prefix: Self::PREFIX,
            })?;

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OrderNumberError::InvalidDigits {
                prefix: Self::PREFIX,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the order number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `OrderNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderNumber {
    type Err = OrderNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for OrderNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for OrderNumber {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for OrderNumber {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for OrderNumber {
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
    fn test_generate_has_prefix() {
        let number = OrderNumber::generate();
        assert!(number.as_str().starts_with("KTC-"));
    }

    #[test]
    fn test_from_timestamp_millis() {
        let number = OrderNumber::from_timestamp_millis(1_735_689_600_000);
        assert_eq!(number.as_str(), "KTC-1735689600000");
    }

    #[test]
    fn test_parse_valid() {
        let number = OrderNumber::parse("KTC-1735689600000").unwrap();
        assert_eq!(number.as_str(), "KTC-1735689600000");
    }

    #[test]
    fn test_parse_roundtrip() {
        let generated = OrderNumber::generate();
        let parsed = OrderNumber::parse(generated.as_str()).unwrap();
        assert_eq!(parsed, generated);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(OrderNumber::parse(""), Err(OrderNumberError::Empty)));
    }

    #[test]
    fn test_parse_missing_prefix() {
        assert!(matches!(
            OrderNumber::parse("1735689600000"),
            Err(OrderNumberError::MissingPrefix { .. })
        ));
        assert!(matches!(
            OrderNumber::parse("ktc-1735689600000"),
            Err(OrderNumberError::MissingPrefix { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_digits() {
        assert!(matches!(
            OrderNumber::parse("KTC-"),
            Err(OrderNumberError::InvalidDigits { .. })
        ));
        assert!(matches!(
            OrderNumber::parse("KTC-17abc"),
            Err(OrderNumberError::InvalidDigits { .. })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let number = OrderNumber::parse("KTC-1735689600000").unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"KTC-1735689600000\"");

        let parsed: OrderNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, number);
    }
}
