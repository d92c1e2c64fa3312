//! Append-only history entries of a medical record
//!
//! A [`HistoryRecord`] is immutable once built. It renders two derived strings,
//! neither of which is stored:
//!
//! - audit string: `[<timestamp>] <action> - <details>`
//! - short summary: `<action>: <details>` or `<action>: No details`
//!
//! In both, details longer than 50 characters are cut to their first 50
//! characters followed by `...`. The cut counts characters, not bytes or words.

use super::errors::ValidationError;
use super::ids::{HistoryRecordId, MedicalRecordId};
use super::result::ValidationResult;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

const MAX_ACTION_LENGTH: usize = 255;
const MAX_DETAILS_LENGTH: usize = 10_000;
const SUMMARY_LENGTH: usize = 50;
const ELLIPSIS: &str = "...";
const NO_DETAILS: &str = "No details";

/// Single entry in a medical record's audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    id: HistoryRecordId,
    medical_record_id: MedicalRecordId,
    action: String,
    details: String,
    timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    /// Builds a new entry stamped with the current time
    ///
    /// `details` of `None` is stored as an empty string.
    pub fn create(
        medical_record_id: MedicalRecordId,
        action: &str,
        details: Option<&str>,
    ) -> ValidationResult<Self> {
        Self::new(
            HistoryRecordId::new(),
            medical_record_id,
            action,
            details,
            Utc::now(),
        )
    }

    /// Rehydrates a previously persisted entry
    pub fn new(
        id: HistoryRecordId,
        medical_record_id: MedicalRecordId,
        action: &str,
        details: Option<&str>,
        timestamp: DateTime<Utc>,
    ) -> ValidationResult<Self> {
        Ok(Self {
            id,
            medical_record_id,
            action: validate_action(action)?,
            details: validate_details(details)?,
            timestamp,
        })
    }

    pub fn id(&self) -> HistoryRecordId {
        self.id
    }

    pub fn medical_record_id(&self) -> MedicalRecordId {
        self.medical_record_id
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// `[<timestamp>] <action> - <details, truncated>`
    pub fn to_audit_string(&self) -> String {
        format!(
            "[{}] {} - {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.action,
            truncate(&self.details)
        )
    }

    /// `<action>: <details, truncated>` with a placeholder for empty details
    pub fn summary(&self) -> String {
        let details = if self.details.is_empty() {
            NO_DETAILS.to_string()
        } else {
            truncate(&self.details)
        };
        format!("{}: {}", self.action, details)
    }
}

fn truncate(details: &str) -> String {
    match details.char_indices().nth(SUMMARY_LENGTH) {
        Some((cut, _)) => format!("{}{}", &details[..cut], ELLIPSIS),
        None => details.to_string(),
    }
}

// Length limits apply to the raw input; the stored value is trimmed.
fn validate_action(action: &str) -> ValidationResult<String> {
    if action.trim().is_empty() {
        return Err(ValidationError::Blank { field: "action" });
    }
    if action.chars().count() > MAX_ACTION_LENGTH {
        return Err(ValidationError::TooLong {
            field: "action",
            max: MAX_ACTION_LENGTH,
        });
    }
    Ok(action.trim().to_string())
}

fn validate_details(details: Option<&str>) -> ValidationResult<String> {
    let Some(details) = details else {
        return Ok(String::new());
    };
    if details.chars().count() > MAX_DETAILS_LENGTH {
        return Err(ValidationError::TooLong {
            field: "details",
            max: MAX_DETAILS_LENGTH,
        });
    }
    Ok(details.trim().to_string())
}
