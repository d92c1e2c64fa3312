// Clinic Records - clinic and billing domain core
// Copyright (c) 2025 Clinic Records Contributors
// Licensed under the MIT License

//! # Clinic Records
//!
//! Domain core for a small healthcare clinic that also bills customers.
//!
//! ## Overview
//!
//! - **Identifiers**: validated person and organization tax identifiers
//! - **Entities**: patients, organizations, doctors, appointments, medical
//!   records with an append-only history, customers and charges
//! - **Billing values**: positive two-decimal amounts and currency codes
//!
//! Every entity is built through a validating constructor and every setter
//! validates before it assigns, so an entity is never observed in an invalid
//! state.
//!
//! ## Architecture
//!
//! - [`domain`] - Value types, entities and errors
//! - [`adapters`] - Storage boundary with an in-memory implementation
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust
//! use clinic_records::domain::{Customer, Charge};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let customer = Customer::create("Clinica Sol", "billing@sol.example.com")?;
//! let mut charge = Charge::create(
//!     Decimal::new(100_005, 3),
//!     "USD",
//!     Some("Consultation".to_string()),
//!     customer,
//!     "card",
//! )?;
//! assert_eq!(charge.amount().to_string(), "100.01");
//!
//! charge.mark_as_succeeded()?;
//! assert!(charge.mark_as_failed().is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Validation failures are [`domain::ValidationError`]; everything else is
//! wrapped in [`domain::ClinicError`]:
//!
//! ```rust
//! use clinic_records::domain::{ClinicError, PersonId};
//!
//! fn parse(raw: &str) -> Result<PersonId, ClinicError> {
//!     Ok(PersonId::parse(raw)?)
//! }
//!
//! assert!(parse("666-12-3456").unwrap_err().is_client_error());
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
