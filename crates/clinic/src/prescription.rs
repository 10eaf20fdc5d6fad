use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::{Entity, PatientId, PrescriptionId};

/// Issued prescription, linked to a patient by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    id: PrescriptionId,
    patient_id: PatientId,
    medication: String,
    date_issued: DateTime<Utc>,
}

impl Prescription {
    pub fn new(
        id: PrescriptionId,
        patient_id: PatientId,
        medication: impl Into<String>,
        date_issued: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            patient_id,
            medication: medication.into(),
            date_issued,
        }
    }

    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    pub fn medication(&self) -> &str {
        &self.medication
    }

    pub fn date_issued(&self) -> DateTime<Utc> {
        self.date_issued
    }
}

impl Entity for Prescription {
    type Id = PrescriptionId;

    fn id(&self) -> PrescriptionId {
        self.id
    }
}

impl core::fmt::Display for Prescription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[Prescription] ID: {}, Medication: {}, Date: {}, Patient ID: {}",
            self.id,
            self.medication,
            self.date_issued.format("%Y-%m-%d"),
            self.patient_id
        )
    }
}
