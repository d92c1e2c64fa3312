//! Patient aggregate

use super::entity::Entity;
use super::errors::ValidationError;
use super::ids::{OrganizationId, PatientId};
use super::person_id::PersonId;
use super::result::ValidationResult;
use super::rules::{self, ADDRESS_MAX, NAME_MAX};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Closed set of accepted gender codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "NB")]
    NonBinary,
    #[serde(rename = "OTHER")]
    Other,
}

impl Gender {
    /// Canonical code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::NonBinary => "NB",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    /// Case-insensitive: `"f"`, `"F"` and `" nb "` are all accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ValidationError::Blank { field: "gender" });
        }
        match s.trim().to_uppercase().as_str() {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            "NB" => Ok(Self::NonBinary),
            "OTHER" => Ok(Self::Other),
            _ => Err(ValidationError::UnknownValue {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

/// Patient registered with an organization
///
/// The person identifier is fixed for the lifetime of the entity. Equality is
/// identifier plus person identifier.
#[derive(Clone, Serialize)]
pub struct Patient {
    id: PatientId,
    organization_id: OrganizationId,
    name: String,
    person_id: PersonId,
    date_of_birth: NaiveDate,
    gender: Gender,
    address: String,
    contact: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Patient {
    /// Registers a new patient with a fresh identifier and current timestamps
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] raised by the field rules.
    pub fn create(
        organization_id: OrganizationId,
        name: &str,
        person_id: &str,
        date_of_birth: NaiveDate,
        gender: &str,
        address: &str,
        contact: &str,
    ) -> ValidationResult<Self> {
        let now = Utc::now();
        let patient = Self::new(
            PatientId::new(),
            organization_id,
            name,
            PersonId::parse(person_id)?,
            date_of_birth,
            gender,
            address,
            contact,
            now,
            now,
        )?;
        tracing::debug!(
            patient_id = %patient.id,
            person_id = %patient.person_id.masked(),
            "Patient created"
        );
        Ok(patient)
    }

    /// Rehydrates a previously persisted patient
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PatientId,
        organization_id: OrganizationId,
        name: &str,
        person_id: PersonId,
        date_of_birth: NaiveDate,
        gender: &str,
        address: &str,
        contact: &str,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> ValidationResult<Self> {
        Ok(Self {
            id,
            organization_id,
            name: validate_name(name)?,
            person_id,
            date_of_birth: validate_date_of_birth(date_of_birth)?,
            gender: gender.parse()?,
            address: rules::required_text("address", address, ADDRESS_MAX)?,
            contact: rules::contact(contact)?,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn person_id(&self) -> &PersonId {
        &self.person_id
    }

    /// Person identifier safe to print in logs
    pub fn masked_person_id(&self) -> String {
        self.person_id.masked()
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_name(&mut self, name: &str) -> ValidationResult<()> {
        self.name = validate_name(name)?;
        self.touch();
        Ok(())
    }

    pub fn set_date_of_birth(&mut self, date_of_birth: NaiveDate) -> ValidationResult<()> {
        self.date_of_birth = validate_date_of_birth(date_of_birth)?;
        self.touch();
        Ok(())
    }

    pub fn set_gender(&mut self, gender: &str) -> ValidationResult<()> {
        self.gender = gender.parse()?;
        self.touch();
        Ok(())
    }

    pub fn set_address(&mut self, address: &str) -> ValidationResult<()> {
        self.address = rules::required_text("address", address, ADDRESS_MAX)?;
        self.touch();
        Ok(())
    }

    pub fn set_contact(&mut self, contact: &str) -> ValidationResult<()> {
        self.contact = rules::contact(contact)?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn validate_name(name: &str) -> ValidationResult<String> {
    rules::required_text("name", name, NAME_MAX)
}

fn validate_date_of_birth(date_of_birth: NaiveDate) -> ValidationResult<NaiveDate> {
    if date_of_birth > Utc::now().date_naive() {
        return Err(ValidationError::InFuture {
            field: "date_of_birth",
        });
    }
    Ok(date_of_birth)
}

impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.person_id == other.person_id
    }
}

impl Eq for Patient {}

impl std::hash::Hash for Patient {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.person_id.hash(state);
    }
}

impl fmt::Debug for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Patient")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("person_id", &self.person_id.masked())
            .finish_non_exhaustive()
    }
}

impl Entity for Patient {
    type Id = PatientId;
    const KIND: &'static str = "patient";

    fn id(&self) -> PatientId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use test_case::test_case;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1985, 4, 12).unwrap()
    }

    fn sample() -> Patient {
        Patient::create(
            OrganizationId::new(),
            "Ana Silva",
            "219-09-9999",
            dob(),
            "F",
            "Rua das Flores 10",
            "+5511987654321",
        )
        .unwrap()
    }

    fn stale() -> Patient {
        let long_ago = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        Patient::new(
            PatientId::new(),
            OrganizationId::new(),
            "Ana Silva",
            PersonId::parse("219099999").unwrap(),
            dob(),
            "F",
            "Rua das Flores 10",
            "+5511987654321",
            long_ago,
            long_ago,
        )
        .unwrap()
    }

    #[test]
    fn test_create_sets_fields() {
        let patient = sample();
        assert_eq!(patient.name(), "Ana Silva");
        assert_eq!(patient.person_id().formatted(), "219-09-9999");
        assert_eq!(patient.gender(), Gender::Female);
        assert_eq!(patient.created_at(), patient.updated_at());
    }

    #[test]
    fn test_create_rejects_denylisted_person_id() {
        let result = Patient::create(
            OrganizationId::new(),
            "Ana Silva",
            "123-45-6789",
            dob(),
            "F",
            "Rua das Flores 10",
            "+5511987654321",
        );
        assert!(matches!(result, Err(ValidationError::PersonId(_))));
    }

    #[test]
    fn test_create_rejects_future_birth_date() {
        let tomorrow = Utc::now().date_naive() + Duration::days(1);
        let result = Patient::create(
            OrganizationId::new(),
            "Ana Silva",
            "219-09-9999",
            tomorrow,
            "F",
            "Rua das Flores 10",
            "+5511987654321",
        );
        assert_eq!(
            result.unwrap_err(),
            ValidationError::InFuture {
                field: "date_of_birth"
            }
        );
    }

    #[test]
    fn test_reconstruction_runs_same_rules() {
        let result = Patient::new(
            PatientId::new(),
            OrganizationId::new(),
            "",
            PersonId::parse("219099999").unwrap(),
            dob(),
            "F",
            "Rua das Flores 10",
            "+5511987654321",
            Utc::now(),
            Utc::now(),
        );
        assert_eq!(result.unwrap_err(), ValidationError::Blank { field: "name" });
    }

    #[test_case("f", Gender::Female ; "lower f")]
    #[test_case("M", Gender::Male ; "upper m")]
    #[test_case("nb", Gender::NonBinary ; "lower nb")]
    #[test_case("Other", Gender::Other ; "mixed other")]
    fn test_set_gender_normalizes(input: &str, expected: Gender) {
        let mut patient = sample();
        patient.set_gender(input).unwrap();
        assert_eq!(patient.gender(), expected);
    }

    #[test]
    fn test_set_gender_rejects_unknown() {
        let mut patient = stale();
        let before = patient.updated_at();
        assert!(matches!(
            patient.set_gender("X"),
            Err(ValidationError::UnknownValue { field: "gender", .. })
        ));
        assert_eq!(patient.gender(), Gender::Female);
        assert_eq!(patient.updated_at(), before);
    }

    #[test]
    fn test_setter_bumps_updated_at() {
        let mut patient = stale();
        let before = patient.updated_at();
        patient.set_address("Avenida Paulista 1000").unwrap();
        assert_eq!(patient.address(), "Avenida Paulista 1000");
        assert!(patient.updated_at() > before);
        assert_eq!(patient.created_at(), before);
    }

    #[test]
    fn test_failed_setter_leaves_state_untouched() {
        let mut patient = stale();
        let before = patient.updated_at();
        assert!(patient.set_contact("call me").is_err());
        assert!(patient.set_name(&"x".repeat(101)).is_err());
        assert_eq!(patient.contact(), "+5511987654321");
        assert_eq!(patient.name(), "Ana Silva");
        assert_eq!(patient.updated_at(), before);
    }

    #[test]
    fn test_equality_is_id_and_person_id() {
        let patient = sample();
        let mut renamed = patient.clone();
        renamed.set_name("Ana S. Silva").unwrap();
        assert_eq!(patient, renamed);
        assert_ne!(patient, sample());
    }

    #[test]
    fn test_debug_masks_person_id() {
        let rendered = format!("{:?}", sample());
        assert!(rendered.contains("***-**-9999"));
        assert!(!rendered.contains("219-09"));
    }
}
