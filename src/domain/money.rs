//! Monetary value objects

use super::errors::ValidationError;
use super::result::ValidationResult;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Positive amount held at exactly two fractional digits
///
/// # Examples
///
/// ```
/// use clinic_records::domain::MonetaryAmount;
/// use rust_decimal::Decimal;
///
/// let amount = MonetaryAmount::create(Decimal::from(10)).unwrap();
/// assert_eq!(amount.to_string(), "10.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct MonetaryAmount(Decimal);

impl MonetaryAmount {
    /// Rounds half away from zero to two places
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotPositive`] when `raw` is zero or negative,
    /// or rounds to zero.
    pub fn create(raw: Decimal) -> ValidationResult<Self> {
        if raw <= Decimal::ZERO {
            return Err(ValidationError::NotPositive { field: "amount" });
        }
        let mut value = raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if value.is_zero() {
            return Err(ValidationError::NotPositive { field: "amount" });
        }
        value.rescale(2);
        Ok(Self(value))
    }

    /// Parses a decimal string such as `"100.005"` and normalizes it
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let value = Decimal::from_str(raw.trim()).map_err(|e| ValidationError::InvalidFormat {
            field: "amount",
            reason: e.to_string(),
        })?;
        Self::create(value)
    }

    /// The normalized value
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for MonetaryAmount {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl From<MonetaryAmount> for Decimal {
    fn from(amount: MonetaryAmount) -> Self {
        amount.0
    }
}

/// Three uppercase Latin letters, e.g. `USD`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Accepts the code only if it is already uppercase
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidFormat`] for anything but `[A-Z]{3}`.
    pub fn create(raw: &str) -> ValidationResult<Self> {
        if raw.len() != 3 || !raw.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidFormat {
                field: "currency",
                reason: "must be 3 uppercase letters".to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test_case("10", "10.00" ; "integer")]
    #[test_case("10.5", "10.50" ; "one place")]
    #[test_case("100.005", "100.01" ; "midpoint rounds up")]
    #[test_case("100.004", "100.00" ; "below midpoint rounds down")]
    #[test_case("0.01", "0.01" ; "smallest unit")]
    fn test_amount_normalizes(raw: &str, expected: &str) {
        let amount = MonetaryAmount::create(dec(raw)).unwrap();
        assert_eq!(amount.to_string(), expected);
        assert_eq!(amount.value().scale(), 2);
    }

    #[test_case("0" ; "zero")]
    #[test_case("-1.00" ; "negative")]
    #[test_case("0.004" ; "rounds to zero")]
    fn test_amount_rejects_non_positive(raw: &str) {
        assert_eq!(
            MonetaryAmount::create(dec(raw)),
            Err(ValidationError::NotPositive { field: "amount" })
        );
    }

    #[test]
    fn test_amount_parse() {
        assert_eq!(MonetaryAmount::parse(" 42.1 ").unwrap().to_string(), "42.10");
        assert!(matches!(
            MonetaryAmount::parse("abc"),
            Err(ValidationError::InvalidFormat { field: "amount", .. })
        ));
    }

    #[test]
    fn test_amount_equality_after_normalization() {
        assert_eq!(
            MonetaryAmount::create(dec("10")).unwrap(),
            MonetaryAmount::create(dec("10.00")).unwrap()
        );
    }

    #[test_case("USD" ; "dollar")]
    #[test_case("BRL" ; "real")]
    fn test_currency_accepts(raw: &str) {
        assert_eq!(CurrencyCode::create(raw).unwrap().as_str(), raw);
    }

    #[test_case("usd" ; "lowercase")]
    #[test_case("US" ; "too short")]
    #[test_case("USDX" ; "too long")]
    #[test_case("U5D" ; "digit")]
    #[test_case("ÜSD" ; "non latin")]
    fn test_currency_rejects(raw: &str) {
        assert!(CurrencyCode::create(raw).is_err());
    }
}
