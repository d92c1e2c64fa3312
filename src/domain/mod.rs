//! Domain models and types
//!
//! Everything in this module is synchronous and performs no I/O. Values are
//! validated when they are built and again whenever an entity is mutated, so no
//! instance can exist in a state its rules reject.
//!
//! # Overview
//!
//! - **Regulated identifiers** ([`PersonId`], [`OrgTaxId`])
//! - **Value objects** ([`MonetaryAmount`], [`CurrencyCode`])
//! - **Entities** ([`Patient`], [`Customer`], [`Organization`], [`Doctor`],
//!   [`Appointment`], [`MedicalRecord`], [`Charge`])
//! - **Audit trail** ([`HistoryRecord`])
//! - **Errors** ([`ValidationError`], [`ClinicError`])
//!
//! # Construction
//!
//! Each entity has a `create` factory for new records (fresh identifier, current
//! timestamps) and a `new` constructor for rehydrating stored state. Both run the
//! same field rules.
//!
//! ```rust
//! use clinic_records::domain::{MedicalRecord, DoctorId, OrganizationId, PatientId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut record = MedicalRecord::create(
//!     PatientId::new(),
//!     OrganizationId::new(),
//!     DoctorId::new(),
//!     "Hypertension stage 1",
//! )?;
//! record.record_history("CREATED", Some("Initial consultation"))?;
//! assert_eq!(record.history_records().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Entities are plain owned values. Mutation needs `&mut`, so a shared entity
//! must be changed through a single writer such as
//! [`EntityStore::update`](crate::adapters::store::EntityStore::update).

pub mod appointment;
pub mod charge;
pub mod customer;
pub mod doctor;
pub mod entity;
pub mod errors;
pub mod history;
pub mod ids;
pub mod medical_record;
pub mod money;
pub mod organization;
pub mod patient;
pub mod person_id;
pub mod result;
pub(crate) mod rules;
pub mod tax_id;

pub use appointment::Appointment;
pub use charge::{Charge, ChargeStatus};
pub use customer::Customer;
pub use doctor::Doctor;
pub use entity::Entity;
pub use errors::{ClinicError, IdentifierViolation, ValidationError};
pub use history::HistoryRecord;
pub use ids::{
    AppointmentId, ChargeId, CustomerId, DoctorId, HistoryRecordId, MedicalRecordId,
    OrganizationId, PatientId,
};
pub use medical_record::MedicalRecord;
pub use money::{CurrencyCode, MonetaryAmount};
pub use organization::Organization;
pub use patient::{Gender, Patient};
pub use person_id::PersonId;
pub use result::{Result, ValidationResult};
pub use tax_id::OrgTaxId;
