//! Configuration management.
//!
//! TOML-based configuration with `${VAR_NAME}` substitution, `CLINIC_*`
//! environment overrides and validation on load.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clinic_records::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("clinic.toml")?;
//! println!("Default currency: {}", config.billing.default_currency);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`BillingConfig`] - Billing defaults
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [billing]
//! default_currency = "${CLINIC_CURRENCY}"
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/clinic"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{ApplicationConfig, BillingConfig, ClinicConfig, LoggingConfig};
