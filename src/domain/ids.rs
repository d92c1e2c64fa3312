//! Entity identifier types
//!
//! Every aggregate is keyed by a UUID assigned at creation and never reassigned.
//! Each aggregate gets its own newtype so a `PatientId` can never be passed where
//! a `DoctorId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID, typically one loaded from storage
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`Patient`](super::Patient)
    PatientId
);
entity_id!(
    /// Identifier of an [`Organization`](super::Organization)
    OrganizationId
);
entity_id!(
    /// Identifier of a [`Customer`](super::Customer)
    CustomerId
);
entity_id!(
    /// Identifier of a [`Doctor`](super::Doctor)
    DoctorId
);
entity_id!(
    /// Identifier of an [`Appointment`](super::Appointment)
    AppointmentId
);
entity_id!(
    /// Identifier of a [`MedicalRecord`](super::MedicalRecord)
    MedicalRecordId
);
entity_id!(
    /// Identifier of a [`HistoryRecord`](super::HistoryRecord)
    HistoryRecordId
);
entity_id!(
    /// Identifier of a [`Charge`](super::Charge)
    ChargeId
);
