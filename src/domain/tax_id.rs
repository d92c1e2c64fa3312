//! Organization tax identifier (EIN-like)
//!
//! Nine decimal digits: a two-digit prefix followed by seven digits. Only hyphens
//! are accepted as separators. The prefix and denylist rules differ from
//! [`PersonId`](super::PersonId) and are kept separate on purpose.

use super::errors::{IdentifierViolation, ValidationError};
use super::result::ValidationResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DENYLIST: [&str; 11] = [
    "00-0000000",
    "07-7777777",
    "11-1111111",
    "22-2222222",
    "33-3333333",
    "44-4444444",
    "55-5555555",
    "66-6666666",
    "77-7777777",
    "88-8888888",
    "99-9999999",
];

/// Validated organization tax identifier
///
/// # Examples
///
/// ```
/// use clinic_records::domain::OrgTaxId;
///
/// let ein = OrgTaxId::parse("123456789").unwrap();
/// assert_eq!(ein.formatted(), "12-3456789");
/// assert!(!OrgTaxId::is_valid("05-1234567"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrgTaxId(String);

impl OrgTaxId {
    /// Parses and validates an organization tax identifier
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TaxId`] naming the first violated rule.
    pub fn parse(value: &str) -> ValidationResult<Self> {
        let digits = value.replace('-', "");
        validate(&digits).map_err(ValidationError::TaxId)?;
        Ok(Self(digits))
    }

    /// Reports whether `value` is a valid tax identifier, discarding the reason
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// The nine digits without separators
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// `XX-XXXXXXX`
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..2], &self.0[2..])
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

    let prefix = &digits[..2];
    if prefix == "00" {
        return Err(IdentifierViolation::ZeroPrefix);
    }
    if prefix.starts_with('0') {
        return Err(IdentifierViolation::LeadingZeroPrefix);
    }

    if let Some(hit) = DENYLIST.iter().find(|d| d.replace('-', "") == digits) {
        return Err(IdentifierViolation::Denylisted((*hit).to_string()));
    }
    Ok(())
}

impl fmt::Display for OrgTaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for OrgTaxId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OrgTaxId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OrgTaxId> for String {
    fn from(id: OrgTaxId) -> Self {
        id.formatted()
    }
}
