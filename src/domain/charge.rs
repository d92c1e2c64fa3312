//! Charge aggregate and its payment status machine
//!
//! ```text
//! PENDING ──► SUCCEEDED
//!    │
//!    └──────► FAILED
//! ```
//!
//! Both outcomes are terminal. A second transition is rejected rather than
//! overwriting the recorded outcome.

use super::customer::Customer;
use super::entity::Entity;
use super::errors::ValidationError;
use super::ids::ChargeId;
use super::money::{CurrencyCode, MonetaryAmount};
use super::result::ValidationResult;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

const MAX_PAYMENT_METHOD_LENGTH: usize = 50;

/// Payment outcome of a charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeStatus {
    Pending,
    Succeeded,
    Failed,
}

impl ChargeStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn can_transition_to(&self, next: ChargeStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Succeeded) | (Self::Pending, Self::Failed)
        )
    }
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
        };
        f.write_str(s)
    }
}

/// Amount billed to a customer; equality is identifier only
#[derive(Debug, Clone, Serialize)]
pub struct Charge {
    id: ChargeId,
    amount: MonetaryAmount,
    currency: CurrencyCode,
    description: Option<String>,
    customer: Customer,
    payment_method: String,
    status: ChargeStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Charge {
    /// Opens a pending charge
    ///
    /// # Errors
    ///
    /// Fails if the amount is not positive, the currency is not three uppercase
    /// letters or the payment method is blank or longer than 50 characters.
    pub fn create(
        amount: Decimal,
        currency: &str,
        description: Option<String>,
        customer: Customer,
        payment_method: &str,
    ) -> ValidationResult<Self> {
        let now = Utc::now();
        let charge = Self::new(
            ChargeId::new(),
            MonetaryAmount::create(amount)?,
            CurrencyCode::create(currency)?,
            description,
            customer,
            payment_method,
            ChargeStatus::Pending,
            now,
            now,
        )?;
        tracing::debug!(
            charge_id = %charge.id,
            amount = %charge.amount,
            currency = %charge.currency,
            "Charge created"
        );
        Ok(charge)
    }

    /// Rehydrates a previously persisted charge
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ChargeId,
        amount: MonetaryAmount,
        currency: CurrencyCode,
        description: Option<String>,
        customer: Customer,
        payment_method: &str,
        status: ChargeStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> ValidationResult<Self> {
        Ok(Self {
            id,
            amount,
            currency,
            description,
            customer,
            payment_method: validate_payment_method(payment_method)?,
            status,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> ChargeId {
        self.id
    }

    pub fn amount(&self) -> MonetaryAmount {
        self.amount
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn status(&self) -> ChargeStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn mark_as_succeeded(&mut self) -> ValidationResult<()> {
        self.transition(ChargeStatus::Succeeded)
    }

    pub fn mark_as_failed(&mut self) -> ValidationResult<()> {
        self.transition(ChargeStatus::Failed)
    }

    fn transition(&mut self, next: ChargeStatus) -> ValidationResult<()> {
        if !self.status.can_transition_to(next) {
            tracing::warn!(
                charge_id = %self.id,
                from = %self.status,
                to = %next,
                "Rejected charge status transition"
            );
            return Err(ValidationError::InvalidTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_payment_method(payment_method: &str) -> ValidationResult<String> {
    if payment_method.trim().is_empty() {
        return Err(ValidationError::Blank {
            field: "payment_method",
        });
    }
    if payment_method.chars().count() > MAX_PAYMENT_METHOD_LENGTH {
        return Err(ValidationError::TooLong {
            field: "payment_method",
            max: MAX_PAYMENT_METHOD_LENGTH,
        });
    }
    Ok(payment_method.to_string())
}

impl PartialEq for Charge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Charge {}

impl Entity for Charge {
    type Id = ChargeId;
    const KIND: &'static str = "charge";

    fn id(&self) -> ChargeId {
        self.id
    }
}
