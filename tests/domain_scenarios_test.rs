//! End-to-end scenarios across the clinic and billing entities

use chrono::{Duration, NaiveDate, Utc};
use clinic_records::domain::{
    Charge, ChargeStatus, Customer, Doctor, Gender, HistoryRecord, MedicalRecord, Organization,
    Patient, ValidationError,
};
use rust_decimal::Decimal;

fn organization() -> Organization {
    Organization::create("Clinica Sol", "Rua das Flores, 100", "12-3456789").unwrap()
}

fn patient(org: &Organization) -> Patient {
    Patient::create(
        org.id(),
        "Maria Silva",
        "219-09-9999",
        NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
        "f",
        "Rua Azul, 12",
        "+5511987654321",
    )
    .unwrap()
}

#[test]
fn test_patient_visit_is_recorded_in_history() {
    let org = organization();
    let patient = patient(&org);
    let doctor = Doctor::create(
        "Dr. Ana Costa",
        "Cardiology",
        "CRM-12345",
        "ana@sol.example.com",
        "+55 11 4000-1000",
    );

    let mut record =
        MedicalRecord::create(patient.id(), org.id(), doctor.id(), "Hypertension").unwrap();
    record.cache_patient_name(patient.name());
    assert_eq!(record.history_len(), 0);

    record
        .record_history("Consultation", Some("Blood pressure 150/95"))
        .unwrap();
    record.update_treatment(Some("Losartan 50mg".to_string()));
    record.record_history("Prescription", None).unwrap();

    let trail = record.audit_trail();
    assert_eq!(trail.len(), 2);
    assert!(trail[0].ends_with("Consultation - Blood pressure 150/95"));
    assert!(trail[1].ends_with("Prescription - "));
    assert_eq!(
        record.history_records()[1].summary(),
        "Prescription: No details"
    );
    assert_eq!(record.patient_name(), Some("Maria Silva"));
    assert_eq!(patient.gender(), Gender::Female);
}

#[test]
fn test_history_snapshot_is_detached_from_record() {
    let org = organization();
    let patient = patient(&org);
    let doctor = Doctor::create("Dr. B", "GP", "CRM-1", "b@x.example.com", "+55 11 4000-1001");
    let mut record = MedicalRecord::create(patient.id(), org.id(), doctor.id(), "Flu").unwrap();

    record.record_history("Opened", None).unwrap();
    let mut snapshot = record.history_records();
    snapshot.clear();

    assert_eq!(record.history_len(), 1);
}

#[test]
fn test_foreign_history_record_is_rejected() {
    let org = organization();
    let patient = patient(&org);
    let doctor = Doctor::create("Dr. C", "GP", "CRM-2", "c@x.example.com", "+55 11 4000-1002");
    let mut first = MedicalRecord::create(patient.id(), org.id(), doctor.id(), "Flu").unwrap();
    let second = MedicalRecord::create(patient.id(), org.id(), doctor.id(), "Cold").unwrap();

    let foreign = HistoryRecord::create(second.id(), "Note", None).unwrap();
    let err = first.add_history_record(foreign).unwrap_err();
    assert!(matches!(err, ValidationError::ForeignHistoryRecord { .. }));
    assert_eq!(first.history_len(), 0);
}

#[test]
fn test_failed_patient_update_leaves_state_unchanged() {
    let org = organization();
    let mut patient = patient(&org);
    let before = patient.updated_at();

    let tomorrow = Utc::now().date_naive() + Duration::days(1);
    let err = patient.set_date_of_birth(tomorrow).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InFuture {
            field: "date_of_birth"
        }
    );
    assert_eq!(
        patient.date_of_birth(),
        NaiveDate::from_ymd_opt(1985, 3, 15).unwrap()
    );
    assert_eq!(patient.updated_at(), before);

    let err = patient.set_gender("X").unwrap_err();
    assert!(matches!(err, ValidationError::UnknownValue { field: "gender", .. }));
    assert_eq!(patient.gender(), Gender::Female);
}

#[test]
fn test_patient_debug_masks_person_id() {
    let org = organization();
    let patient = patient(&org);
    let debug = format!("{patient:?}");
    assert!(!debug.contains("219-09-9999"));
    assert!(!debug.contains("219099999"));
    assert_eq!(patient.masked_person_id(), "***-**-9999");
}

#[test]
fn test_charge_lifecycle() {
    let customer = Customer::create("Acme Health", "billing@acme.example.com").unwrap();
    let mut charge = Charge::create(
        Decimal::new(2_500, 1),
        "BRL",
        Some("Annual check-up".to_string()),
        customer.clone(),
        "pix",
    )
    .unwrap();

    assert_eq!(charge.status(), ChargeStatus::Pending);
    assert_eq!(charge.amount().to_string(), "250.00");
    assert_eq!(charge.customer(), &customer);

    charge.mark_as_failed().unwrap();
    assert_eq!(charge.status(), ChargeStatus::Failed);

    let err = charge.mark_as_succeeded().unwrap_err();
    assert!(matches!(err, ValidationError::InvalidTransition { .. }));
    assert_eq!(charge.status(), ChargeStatus::Failed);
}

#[test]
fn test_charge_rejects_invalid_input() {
    let customer = Customer::create("Acme Health", "billing@acme.example.com").unwrap();

    let zero = Charge::create(Decimal::ZERO, "USD", None, customer.clone(), "card");
    assert_eq!(
        zero.unwrap_err(),
        ValidationError::NotPositive { field: "amount" }
    );

    let bad_currency = Charge::create(Decimal::ONE, "usd", None, customer.clone(), "card");
    assert!(matches!(
        bad_currency.unwrap_err(),
        ValidationError::InvalidFormat { .. }
    ));

    let blank_method = Charge::create(Decimal::ONE, "USD", None, customer, "  ");
    assert_eq!(
        blank_method.unwrap_err(),
        ValidationError::Blank {
            field: "payment_method"
        }
    );
}

#[test]
fn test_organization_rejects_denylisted_tax_id() {
    let err = Organization::create("Clinica Lua", "Rua Verde, 1", "11-1111111").unwrap_err();
    assert!(matches!(err, ValidationError::TaxId(_)));
}

#[test]
fn test_patient_serializes_to_json() {
    let org = organization();
    let patient = patient(&org);
    let json = serde_json::to_value(&patient).unwrap();
    assert_eq!(json["person_id"], "219-09-9999");
    assert_eq!(json["gender"], "F");
}
