//! Field rules shared by several entities
//!
//! Each rule is applied both at construction and in the matching setter, so an
//! entity can never hold a value the rule would reject.

use super::errors::ValidationError;
use super::result::ValidationResult;
use regex::Regex;
use std::sync::LazyLock;

pub(crate) const NAME_MAX: usize = 100;
pub(crate) const ADDRESS_MAX: usize = 200;
pub(crate) const EMAIL_MAX: usize = 100;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

static CONTACT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s-]{10,15}$").expect("contact pattern compiles"));

/// Required text of at most `max` characters
///
/// Whitespace-only input counts as blank. The value is kept as given.
pub(crate) fn required_text(field: &'static str, value: &str, max: usize) -> ValidationResult<String> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value.to_string())
}

/// Loose e-mail address check, at most 100 characters
pub(crate) fn email(value: &str) -> ValidationResult<String> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field: "email" });
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidFormat {
            field: "email",
            reason: "expected local@domain.tld".to_string(),
        });
    }
    if value.chars().count() > EMAIL_MAX {
        return Err(ValidationError::TooLong {
            field: "email",
            max: EMAIL_MAX,
        });
    }
    Ok(value.to_string())
}

/// Phone-like contact: 10 to 15 digits, spaces or hyphens, optional leading `+`
pub(crate) fn contact(value: &str) -> ValidationResult<String> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field: "contact" });
    }
    if !CONTACT_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidFormat {
            field: "contact",
            reason: "expected 10-15 digits, spaces or hyphens with optional leading +".to_string(),
        });
    }
    Ok(value.to_string())
}
