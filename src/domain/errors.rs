//! Domain error types
//!
//! The core raises exactly one kind of failure, [`ValidationError`], at the first
//! violated rule. [`ClinicError`] is the crate-wide error that wraps it together
//! with configuration, storage and I/O failures from the outer layers.

use thiserror::Error;

/// Rule violated by a regulated identifier (person ID or organization tax ID)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierViolation {
    /// Input did not normalize to exactly nine characters
    #[error("must contain exactly 9 digits (found {found})")]
    Length { found: usize },

    /// Input contains something other than decimal digits
    #[error("must contain only numeric digits")]
    NonDigit,

    /// Area segment is one of the never-issued values
    #[error("area {0} is invalid")]
    ReservedArea(String),

    /// Area segment is in the 900-999 range
    #[error("area {0} is reserved")]
    AreaOutOfRange(String),

    /// Group segment is 00
    #[error("group number cannot be 00")]
    ZeroGroup,

    /// Serial segment is 0000
    #[error("serial number cannot be 0000")]
    ZeroSerial,

    /// Prefix starts with 0
    #[error("cannot start with 0")]
    LeadingZeroPrefix,

    /// Prefix is 00
    #[error("cannot start with 00")]
    ZeroPrefix,

    /// Structurally valid but trivially sequential or reserved value
    #[error("{0} is a reserved or sequential value")]
    Denylisted(String),
}

/// Validation failure raised by value objects and entities
///
/// Every variant is caused by caller-supplied data. The `Display` text is the
/// human-readable reason handed back to the boundary layer unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required text field missing or whitespace only
    #[error("{field} cannot be blank")]
    Blank { field: &'static str },

    /// Text field longer than its limit
    #[error("{field} exceeds maximum length ({max} chars)")]
    TooLong { field: &'static str, max: usize },

    /// Text field does not match its required pattern
    #[error("Invalid {field} format: {reason}")]
    InvalidFormat { field: &'static str, reason: String },

    /// Date lies after today
    #[error("{field} cannot be in the future")]
    InFuture { field: &'static str },

    /// Numeric value zero or negative
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },

    /// Value outside a closed enumerated set
    #[error("Invalid {field}: {value}")]
    UnknownValue { field: &'static str, value: String },

    /// Person identifier rule violated
    #[error("Invalid person ID: {0}")]
    PersonId(IdentifierViolation),

    /// Organization tax identifier rule violated
    #[error("Invalid organization tax ID: {0}")]
    TaxId(IdentifierViolation),

    /// History record belongs to a different medical record
    #[error("History record belongs to medical record {owner}, not {record}")]
    ForeignHistoryRecord { owner: String, record: String },

    /// Charge status change not allowed from the current status
    #[error("Cannot transition charge from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl ValidationError {
    /// Name of the offending field, when the failure is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Blank { field }
            | Self::TooLong { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::InFuture { field }
            | Self::NotPositive { field }
            | Self::UnknownValue { field, .. } => Some(field),
            Self::PersonId(_) => Some("person_id"),
            Self::TaxId(_) => Some("tax_id"),
            Self::ForeignHistoryRecord { .. } => Some("history_record"),
            Self::InvalidTransition { .. } => Some("status"),
        }
    }
}

/// Main crate error type
#[derive(Debug, Error)]
pub enum ClinicError {
    /// Caller supplied invalid data
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Entity not present in the store
    #[error("Not found: {0}")]
    NotFound(String),

    /// Entity with the same identifier already stored
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl ClinicError {
    /// Whether the failure stems from caller-supplied data
    ///
    /// A transport layer maps these to client errors rather than server faults.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::NotFound(_) | Self::Conflict(_)
        )
    }
}

impl From<std::io::Error> for ClinicError {
    fn from(err: std::io::Error) -> Self {
        ClinicError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClinicError {
    fn from(err: serde_json::Error) -> Self {
        ClinicError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ClinicError {
    fn from(err: toml::de::Error) -> Self {
        ClinicError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 100,
        };
        assert_eq!(err.to_string(), "name exceeds maximum length (100 chars)");
    }

    #[test]
    fn test_identifier_violation_display() {
        let err = ValidationError::PersonId(IdentifierViolation::ZeroGroup);
        assert_eq!(
            err.to_string(),
            "Invalid person ID: group number cannot be 00"
        );
    }

    #[test]
    fn test_validation_error_field() {
        assert_eq!(ValidationError::Blank { field: "address" }.field(), Some("address"));
        assert_eq!(
            ValidationError::TaxId(IdentifierViolation::NonDigit).field(),
            Some("tax_id")
        );
    }

    #[test]
    fn test_validation_converts_into_clinic_error() {
        let err: ClinicError = ValidationError::NotPositive { field: "amount" }.into();
        assert!(matches!(err, ClinicError::Validation(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_configuration_is_not_client_error() {
        let err = ClinicError::Configuration("bad".to_string());
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ClinicError = io_err.into();
        assert!(matches!(err, ClinicError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ClinicError = toml_err.into();
        assert!(matches!(err, ClinicError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_clinic_error_implements_std_error() {
        let err = ClinicError::Validation(ValidationError::Blank { field: "name" });
        let _: &dyn std::error::Error = &err;
    }
}
