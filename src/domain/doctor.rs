//! Doctor directory entry

use super::entity::Entity;
use super::ids::DoctorId;
use serde::Serialize;

/// Doctor who can own medical records and appointments
///
/// Plain record: fields are not validated. New doctors start active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    id: DoctorId,
    name: String,
    specialty: String,
    registration_code: String,
    email: String,
    phone: String,
    active: bool,
}

impl Doctor {
    pub fn create(
        name: impl Into<String>,
        specialty: impl Into<String>,
        registration_code: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: DoctorId::new(),
            name: name.into(),
            specialty: specialty.into(),
            registration_code: registration_code.into(),
            email: email.into(),
            phone: phone.into(),
            active: true,
        }
    }

    /// Rehydrates a previously persisted doctor
    pub fn new(
        id: DoctorId,
        name: impl Into<String>,
        specialty: impl Into<String>,
        registration_code: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
            registration_code: registration_code.into(),
            email: email.into(),
            phone: phone.into(),
            active,
        }
    }

    pub fn id(&self) -> DoctorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    /// Professional registration code issued by the medical board
    pub fn registration_code(&self) -> &str {
        &self.registration_code
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_specialty(&mut self, specialty: impl Into<String>) {
        self.specialty = specialty.into();
    }

    pub fn set_registration_code(&mut self, registration_code: impl Into<String>) {
        self.registration_code = registration_code.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Entity for Doctor {
    type Id = DoctorId;
    const KIND: &'static str = "doctor";

    fn id(&self) -> DoctorId {
        self.id
    }
}
