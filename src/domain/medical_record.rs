//! Medical record aggregate and its audit trail

use super::entity::Entity;
use super::errors::ValidationError;
use super::history::HistoryRecord;
use super::ids::{DoctorId, MedicalRecordId, OrganizationId, PatientId};
use super::result::ValidationResult;
use super::rules;
use chrono::{DateTime, Utc};
use serde::Serialize;

const MAX_DIAGNOSIS_LENGTH: usize = 10_000;

/// Diagnosis and treatment of one patient, with an append-only history
///
/// The history list is private. Reads return a fresh copy and the only way to
/// change it is to append; correcting an entry means appending a new one.
#[derive(Debug, Clone, Serialize)]
pub struct MedicalRecord {
    id: MedicalRecordId,
    patient_id: PatientId,
    organization_id: OrganizationId,
    patient_name: Option<String>,
    doctor_id: DoctorId,
    diagnosis: String,
    treatment: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    history: Vec<HistoryRecord>,
}

impl MedicalRecord {
    /// Opens a new record with no treatment, notes or history
    pub fn create(
        patient_id: PatientId,
        organization_id: OrganizationId,
        doctor_id: DoctorId,
        diagnosis: &str,
    ) -> ValidationResult<Self> {
        let now = Utc::now();
        let record = Self::new(
            MedicalRecordId::new(),
            patient_id,
            organization_id,
            None,
            doctor_id,
            diagnosis,
            None,
            None,
            now,
            now,
            Vec::new(),
        )?;
        tracing::debug!(
            medical_record_id = %record.id,
            patient_id = %record.patient_id,
            "Medical record created"
        );
        Ok(record)
    }

    /// Rehydrates a previously persisted record together with its history
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: MedicalRecordId,
        patient_id: PatientId,
        organization_id: OrganizationId,
        patient_name: Option<String>,
        doctor_id: DoctorId,
        diagnosis: &str,
        treatment: Option<String>,
        notes: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        history: Vec<HistoryRecord>,
    ) -> ValidationResult<Self> {
        let diagnosis = validate_diagnosis(diagnosis)?;
        if let Some(foreign) = history.iter().find(|h| h.medical_record_id() != id) {
            return Err(foreign_record(id, foreign));
        }
        Ok(Self {
            id,
            patient_id,
            organization_id,
            patient_name,
            doctor_id,
            diagnosis,
            treatment,
            notes,
            created_at,
            updated_at,
            history,
        })
    }

    pub fn id(&self) -> MedicalRecordId {
        self.id
    }

    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    pub fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    /// Display name cached from the patient aggregate, if resolved
    pub fn patient_name(&self) -> Option<&str> {
        self.patient_name.as_deref()
    }

    pub fn doctor_id(&self) -> DoctorId {
        self.doctor_id
    }

    pub fn diagnosis(&self) -> &str {
        &self.diagnosis
    }

    pub fn treatment(&self) -> Option<&str> {
        self.treatment.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Snapshot of the history in insertion order
    pub fn history_records(&self) -> Vec<HistoryRecord> {
        self.history.clone()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Audit string of every history entry, oldest first
    pub fn audit_trail(&self) -> Vec<String> {
        self.history.iter().map(HistoryRecord::to_audit_string).collect()
    }

    /// Appends an entry built elsewhere
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ForeignHistoryRecord`] if the entry belongs to
    /// another medical record.
    pub fn add_history_record(&mut self, record: HistoryRecord) -> ValidationResult<()> {
        if record.medical_record_id() != self.id {
            return Err(foreign_record(self.id, &record));
        }
        self.history.push(record);
        self.touch();
        Ok(())
    }

    /// Builds an entry owned by this record, appends it and returns a copy
    pub fn record_history(
        &mut self,
        action: &str,
        details: Option<&str>,
    ) -> ValidationResult<HistoryRecord> {
        let record = HistoryRecord::create(self.id, action, details)?;
        self.add_history_record(record.clone())?;
        Ok(record)
    }

    pub fn update_diagnosis(&mut self, diagnosis: &str) -> ValidationResult<()> {
        self.diagnosis = validate_diagnosis(diagnosis)?;
        self.touch();
        Ok(())
    }

    pub fn update_treatment(&mut self, treatment: Option<String>) {
        self.treatment = treatment;
        self.touch();
    }

    pub fn update_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
        self.touch();
    }

    /// Caches the patient's display name; not a modification of the record
    pub fn cache_patient_name(&mut self, name: impl Into<String>) {
        self.patient_name = Some(name.into());
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn validate_diagnosis(diagnosis: &str) -> ValidationResult<String> {
    rules::required_text("diagnosis", diagnosis, MAX_DIAGNOSIS_LENGTH)
}

fn foreign_record(id: MedicalRecordId, record: &HistoryRecord) -> ValidationError {
    ValidationError::ForeignHistoryRecord {
        owner: record.medical_record_id().to_string(),
        record: id.to_string(),
    }
}

impl PartialEq for MedicalRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MedicalRecord {}

impl Entity for MedicalRecord {
    type Id = MedicalRecordId;
    const KIND: &'static str = "medical_record";

    fn id(&self) -> MedicalRecordId {
        self.id
    }
}
