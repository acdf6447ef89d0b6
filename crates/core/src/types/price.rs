//! Monetary price type.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a plain decimal number.
    #[error("price must be a number like 12 or 12.50")]
    InvalidFormat,
    /// The value has more than two decimal places.
    #[error("price can have at most {max} decimal places")]
    TooManyDecimalPlaces {
        /// Maximum allowed decimal places.
        max: u32,
    },
    /// The value is negative.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative price in Tunisian dinars (TND).
///
/// Prices are stored as exact decimals with at most two decimal places.
/// Parsing accepts the strict shape customers and admins type into forms:
/// digits, optionally followed by a dot and one or two more digits. Signs,
/// exponents, and thousands separators are rejected.
///
/// ## Examples
///
/// ```
/// use kotobcom_core::Price;
///
/// let price = Price::parse("12.50")?;
/// assert_eq!(price.to_string(), "12.50");
///
/// assert!(Price::parse("-1").is_err());    // negative
/// assert!(Price::parse("1.999").is_err()); // three decimal places
/// assert!(Price::parse(".50").is_err());   // missing integer part
/// # Ok::<(), kotobcom_core::PriceError>(())
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Maximum number of decimal places.
    pub const MAX_DECIMAL_PLACES: u32 = 2;

    /// A price of zero dinars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Parse a `Price` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is not shaped like
    /// `digits[.digits]`, or has more than two decimal places.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        if s.is_empty() {
            return Err(PriceError::Empty);
        }

        let (integer, fraction) = match s.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (s, None),
        };

        if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PriceError::InvalidFormat);
        }

        if let Some(fraction) = fraction {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PriceError::InvalidFormat);
            }
            if fraction.len() > Self::MAX_DECIMAL_PLACES as usize {
                return Err(PriceError::TooManyDecimalPlaces {
                    max: Self::MAX_DECIMAL_PLACES,
                });
            }
        }

        let value: Decimal = s.parse().map_err(|_| PriceError::InvalidFormat)?;
        Self::from_decimal(value)
    }

    /// Create a `Price` from a [`Decimal`] value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or has more than two
    /// decimal places.
    pub fn from_decimal(value: Decimal) -> Result<Self, PriceError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(PriceError::Negative);
        }

        if value.normalize().scale() > Self::MAX_DECIMAL_PLACES {
            return Err(PriceError::TooManyDecimalPlaces {
                max: Self::MAX_DECIMAL_PLACES,
            });
        }

        Ok(Self(value))
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns true if the price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiply by a quantity, as when pricing a cart line.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul_quantity(&self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }

    /// Add another price, as when totalling an order.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl fmt::Display for Price {
    /// Formats with exactly two decimal places, matching receipts
    /// and the order confirmation message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let d = <Decimal as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(d))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Decimal as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_prices() {
        assert!(Price::parse("0").is_ok());
        assert!(Price::parse("12").is_ok());
        assert!(Price::parse("12.5").is_ok());
        assert!(Price::parse("12.50").is_ok());
        assert!(Price::parse("1250.00").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Price::parse(""), Err(PriceError::Empty)));
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(matches!(Price::parse("abc"), Err(PriceError::InvalidFormat)));
        assert!(matches!(Price::parse("-1"), Err(PriceError::InvalidFormat)));
        assert!(matches!(Price::parse("+1"), Err(PriceError::InvalidFormat)));
        assert!(matches!(Price::parse(".50"), Err(PriceError::InvalidFormat)));
        assert!(matches!(Price::parse("12."), Err(PriceError::InvalidFormat)));
        assert!(matches!(Price::parse("1,250"), Err(PriceError::InvalidFormat)));
        assert!(matches!(Price::parse("1e3"), Err(PriceError::InvalidFormat)));
    }

    #[test]
    fn test_parse_too_many_decimal_places() {
        assert!(matches!(
            Price::parse("12.345"),
            Err(PriceError::TooManyDecimalPlaces { .. })
        ));
    }

    #[test]
    fn test_from_decimal_negative() {
        let negative = Decimal::new(-125, 1);
        assert!(matches!(
            Price::from_decimal(negative),
            Err(PriceError::Negative)
        ));
    }

    #[test]
    fn test_from_decimal_trailing_zeros_ok() {
        // 12.500 has scale 3 but normalizes to two places
        let value = Decimal::new(12_500, 3);
        assert!(Price::from_decimal(value).is_ok());
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Price::parse("12").unwrap().to_string(), "12.00");
        assert_eq!(Price::parse("12.5").unwrap().to_string(), "12.50");
        assert_eq!(Price::parse("12.50").unwrap().to_string(), "12.50");
    }

    #[test]
    fn test_checked_mul_quantity() {
        let price = Price::parse("12.50").unwrap();
        let line = price.checked_mul_quantity(3).unwrap();
        assert_eq!(line.to_string(), "37.50");
    }

    #[test]
    fn test_checked_add() {
        let a = Price::parse("12.50").unwrap();
        let b = Price::parse("7.25").unwrap();
        assert_eq!(a.checked_add(b).unwrap().to_string(), "19.75");
    }

    #[test]
    fn test_zero() {
        assert!(Price::ZERO.is_zero());
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_ordering() {
        let cheap = Price::parse("5.00").unwrap();
        let expensive = Price::parse("50.00").unwrap();
        assert!(cheap < expensive);
    }
}
