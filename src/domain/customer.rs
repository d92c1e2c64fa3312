//! Billing customer

use super::entity::Entity;
use super::ids::CustomerId;
use super::result::ValidationResult;
use super::rules::{self, NAME_MAX};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Customer billed through [`Charge`](super::Charge); equality is identifier only
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn create(name: &str, email: &str) -> ValidationResult<Self> {
        let now = Utc::now();
        let customer = Self::new(CustomerId::new(), name, email, now, now)?;
        tracing::debug!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }

    /// Rehydrates a previously persisted customer
    pub fn new(
        id: CustomerId,
        name: &str,
        email: &str,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> ValidationResult<Self> {
        Ok(Self {
            id,
            name: rules::required_text("name", name, NAME_MAX)?,
            email: rules::email(email)?,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_name(&mut self, name: &str) -> ValidationResult<()> {
        self.name = rules::required_text("name", name, NAME_MAX)?;
        self.touch();
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> ValidationResult<()> {
        self.email = rules::email(email)?;
        self.touch();
        Ok(())
    }

    /// Marks the customer as modified without changing a field
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl std::hash::Hash for Customer {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Customer {
    type Id = CustomerId;
    const KIND: &'static str = "customer";

    fn id(&self) -> CustomerId {
        self.id
    }
}
