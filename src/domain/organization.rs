//! Organization aggregate

use super::entity::Entity;
use super::ids::OrganizationId;
use super::result::ValidationResult;
use super::rules::{self, ADDRESS_MAX, NAME_MAX};
use super::tax_id::OrgTaxId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Clinic or practice that owns patients and medical records
///
/// The tax identifier cannot change after construction. Equality is identifier
/// plus tax identifier.
#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    id: OrganizationId,
    name: String,
    address: String,
    tax_id: OrgTaxId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Organization {
    pub fn create(name: &str, address: &str, tax_id: &str) -> ValidationResult<Self> {
        let now = Utc::now();
        let organization = Self::new(
            OrganizationId::new(),
            name,
            address,
            OrgTaxId::parse(tax_id)?,
            now,
            now,
        )?;
        tracing::debug!(
            organization_id = %organization.id,
            tax_id = %organization.tax_id,
            "Organization created"
        );
        Ok(organization)
    }

    /// Rehydrates a previously persisted organization
    pub fn new(
        id: OrganizationId,
        name: &str,
        address: &str,
        tax_id: OrgTaxId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> ValidationResult<Self> {
        Ok(Self {
            id,
            name: rules::required_text("organization name", name, NAME_MAX)?,
            address: rules::required_text("address", address, ADDRESS_MAX)?,
            tax_id,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> OrganizationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn tax_id(&self) -> &OrgTaxId {
        &self.tax_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_name(&mut self, name: &str) -> ValidationResult<()> {
        self.name = rules::required_text("organization name", name, NAME_MAX)?;
        self.touch();
        Ok(())
    }

    pub fn set_address(&mut self, address: &str) -> ValidationResult<()> {
        self.address = rules::required_text("address", address, ADDRESS_MAX)?;
        self.touch();
        Ok(())
    }

    /// Marks the organization as modified without changing a field
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl PartialEq for Organization {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.tax_id == other.tax_id
    }
}

impl Eq for Organization {}

impl std::hash::Hash for Organization {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.tax_id.hash(state);
    }
}

impl Entity for Organization {
    type Id = OrganizationId;
    const KIND: &'static str = "organization";

    fn id(&self) -> OrganizationId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IdentifierViolation, ValidationError};

    #[test]
    fn test_create_organization() {
        let org = Organization::create("Clinica Sol", "Rua A 1", "12-3456789").unwrap();
        assert_eq!(org.tax_id().formatted(), "12-3456789");
        assert_eq!(org.name(), "Clinica Sol");
    }

    #[test]
    fn test_create_rejects_invalid_tax_id() {
        assert_eq!(
            Organization::create("Clinica Sol", "Rua A 1", "00-1234567").unwrap_err(),
            ValidationError::TaxId(IdentifierViolation::ZeroPrefix)
        );
    }

    #[test]
    fn test_create_rejects_long_address() {
        let address = "r".repeat(201);
        assert_eq!(
            Organization::create("Clinica Sol", &address, "12-3456789").unwrap_err(),
            ValidationError::TooLong {
                field: "address",
                max: 200
            }
        );
    }

    #[test]
    fn test_set_address_validates() {
        let mut org = Organization::create("Clinica Sol", "Rua A 1", "12-3456789").unwrap();
        assert!(org.set_address("   ").is_err());
        assert_eq!(org.address(), "Rua A 1");
        org.set_address("Rua B 2").unwrap();
        assert_eq!(org.address(), "Rua B 2");
    }

    #[test]
    fn test_equality_includes_tax_id() {
        let org = Organization::create("Clinica Sol", "Rua A 1", "12-3456789").unwrap();
        let same_id_other_ein = Organization::new(
            org.id(),
            "Clinica Sol",
            "Rua A 1",
            OrgTaxId::parse("98-7654321").unwrap(),
            org.created_at(),
            org.updated_at(),
        )
        .unwrap();
        assert_ne!(org, same_id_other_ein);
        assert_eq!(org, org.clone());
    }
}
