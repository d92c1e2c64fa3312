//! Result type aliases
//!
//! [`Result`] carries the crate-wide [`ClinicError`]; [`ValidationResult`] is what
//! every factory and setter in the core returns.

use super::errors::{ClinicError, ValidationError};

/// Result type alias for crate operations
///
/// # Examples
///
/// ```
/// use clinic_records::domain::result::Result;
/// use clinic_records::domain::errors::ClinicError;
///
/// fn failing_function() -> Result<()> {
///     Err(ClinicError::NotFound("patient".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ClinicError>;

/// Result of a construction or mutation in the domain core
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
