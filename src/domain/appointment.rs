//! Appointment between a patient and a doctor

use super::entity::Entity;
use super::ids::{AppointmentId, DoctorId, PatientId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Scheduled visit
///
/// Patient and doctor are referenced by identifier only and are not checked
/// here. `status` is free text; any value may replace any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    id: AppointmentId,
    patient_id: PatientId,
    doctor_id: DoctorId,
    scheduled_at: DateTime<Utc>,
    reason: String,
    status: String,
}

impl Appointment {
    pub fn create(
        patient_id: PatientId,
        doctor_id: DoctorId,
        scheduled_at: DateTime<Utc>,
        reason: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self::new(
            AppointmentId::new(),
            patient_id,
            doctor_id,
            scheduled_at,
            reason,
            status,
        )
    }

    /// Rehydrates a previously persisted appointment
    pub fn new(
        id: AppointmentId,
        patient_id: PatientId,
        doctor_id: DoctorId,
        scheduled_at: DateTime<Utc>,
        reason: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            patient_id,
            doctor_id,
            scheduled_at,
            reason: reason.into(),
            status: status.into(),
        }
    }

    pub fn id(&self) -> AppointmentId {
        self.id
    }

    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    pub fn doctor_id(&self) -> DoctorId {
        self.doctor_id
    }

    pub fn scheduled_at(&self) -> DateTime<Utc> {
        self.scheduled_at
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_patient_id(&mut self, patient_id: PatientId) {
        self.patient_id = patient_id;
    }

    pub fn set_doctor_id(&mut self, doctor_id: DoctorId) {
        self.doctor_id = doctor_id;
    }

    pub fn reschedule(&mut self, scheduled_at: DateTime<Utc>) {
        self.scheduled_at = scheduled_at;
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

impl Entity for Appointment {
    type Id = AppointmentId;
    const KIND: &'static str = "appointment";

    fn id(&self) -> AppointmentId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_is_unconstrained() {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap();
        let mut appointment =
            Appointment::create(PatientId::new(), DoctorId::new(), at, "Checkup", "SCHEDULED");
        appointment.set_status("CANCELLED");
        appointment.set_status("SCHEDULED");
        assert_eq!(appointment.status(), "SCHEDULED");
    }

    #[test]
    fn test_reschedule() {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 3, 9, 9, 0, 0).unwrap();
        let mut appointment =
            Appointment::create(PatientId::new(), DoctorId::new(), at, "Checkup", "SCHEDULED");
        appointment.reschedule(later);
        assert_eq!(appointment.scheduled_at(), later);
    }
}
