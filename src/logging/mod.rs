//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use clinic_records::logging::init_logging;
//! use clinic_records::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a rejected entity mutation
///
/// # Example
///
/// ```no_run
/// use clinic_records::log_validation_failure;
/// use clinic_records::domain::{PatientId, ValidationError};
///
/// let id = PatientId::new();
/// let error = ValidationError::Blank { field: "name" };
/// log_validation_failure!("patient", id, error);
/// ```
#[macro_export]
macro_rules! log_validation_failure {
    ($kind:expr, $id:expr, $error:expr) => {
        tracing::warn!(
            kind = $kind,
            id = %$id,
            field = $error.field().unwrap_or("-"),
            error = %$error,
            "Validation failed"
        );
    };
}

/// Log the outcome of an identifier check
///
/// # Example
///
/// ```no_run
/// use clinic_records::log_identifier_check;
///
/// log_identifier_check!("tax_id", true);
/// ```
#[macro_export]
macro_rules! log_identifier_check {
    ($kind:expr, $valid:expr) => {
        tracing::info!(kind = $kind, valid = $valid, "Identifier checked");
    };
}
