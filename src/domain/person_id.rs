//! National person identifier (SSN-like)
//!
//! Nine decimal digits split into area (3), group (2) and serial (4) segments.
//! Input may carry hyphens and whitespace; both are stripped before any check.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. length is exactly nine after stripping
//! 2. digits only
//! 3. area is not `000` or `666` and is below `900`
//! 4. group is not `00`
//! 5. serial is not `0000`
//! 6. value is not on the denylist of trivially sequential numbers

use super::errors::{IdentifierViolation, ValidationError};
use super::result::ValidationResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DENYLIST: [&str; 5] = ["111111111", "123456789", "999999999", "000000000", "123123123"];

/// Validated person identifier
///
/// Only the nine digits are stored; the `XXX-XX-XXXX` form is derived.
///
/// # Examples
///
/// ```
/// use clinic_records::domain::PersonId;
///
/// let id = PersonId::parse("219 09 9999").unwrap();
/// assert_eq!(id.formatted(), "219-09-9999");
/// assert!(!PersonId::is_valid("666-12-3456"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonId(String);

impl PersonId {
    /// Parses and validates a person identifier
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PersonId`] naming the first violated rule.
    pub fn parse(value: &str) -> ValidationResult<Self> {
        let digits: String = value
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect();
        validate(&digits).map_err(ValidationError::PersonId)?;
        Ok(Self(digits))
    }

    /// Reports whether `value` is a valid person identifier, discarding the reason
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// The nine digits without separators
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// `XXX-XX-XXXX`
    pub fn formatted(&self) -> String {
        format!("{}-{}-{}", &self.0[..3], &self.0[3..5], &self.0[5..])
    }

    /// `***-**-XXXX`, safe for log lines
    pub fn masked(&self) -> String {
        format!("***-**-{}", &self.0[5..])
    }
}

fn validate(digits: &str) -> Result<(), IdentifierViolation> {
    let found = digits.chars().count();
    if found != 9 {
        return Err(IdentifierViolation::Length { found });
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentifierViolation::NonDigit);
    }

    let area = &digits[..3];
    if area == "000" || area == "666" {
        return Err(IdentifierViolation::ReservedArea(area.to_string()));
    }
    // Same-width digit strings compare like numbers.
    if area >= "900" {
        return Err(IdentifierViolation::AreaOutOfRange(area.to_string()));
    }
    if &digits[3..5] == "00" {
        return Err(IdentifierViolation::ZeroGroup);
    }
    if &digits[5..] == "0000" {
        return Err(IdentifierViolation::ZeroSerial);
    }
    if DENYLIST.contains(&digits) {
        return Err(IdentifierViolation::Denylisted(digits.to_string()));
    }
    Ok(())
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl fmt::Debug for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PersonId").field(&self.masked()).finish()
    }
}

impl FromStr for PersonId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PersonId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.formatted()
    }
}
