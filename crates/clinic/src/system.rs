//! Clinic system: the two stores plus the derived lookup index.

use std::collections::HashMap;

use chrono::{Duration, Utc};

use tally_core::{DomainResult, PatientId, PrescriptionId, Repository};

use crate::patient::{Gender, Patient};
use crate::prescription::Prescription;

/// Patients, prescriptions, and a patient→prescriptions index derived from
/// them.
///
/// The index is a disposable read model: [`rebuild_index`](Self::rebuild_index)
/// recomputes it wholesale from the prescription store, and any mutation of
/// that store leaves it stale until the next rebuild. It is never maintained
/// incrementally.
#[derive(Debug, Default)]
pub struct Clinic {
    patients: Repository<Patient>,
    prescriptions: Repository<Prescription>,
    index: HashMap<PatientId, Vec<Prescription>>,
}

impl Clinic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the intake sample: three patients, five prescriptions.
    pub fn seed(&mut self) -> DomainResult<()> {
        self.patients.add(Patient::new(
            PatientId::new(1),
            "Alicia Jones",
            20,
            Gender::Female,
        ))?;
        self.patients.add(Patient::new(
            PatientId::new(2),
            "Damson Idris",
            29,
            Gender::Male,
        ))?;
        self.patients.add(Patient::new(
            PatientId::new(3),
            "Max Emilian Verstappen",
            27,
            Gender::Male,
        ))?;

        let now = Utc::now();
        self.prescriptions.add(Prescription::new(
            PrescriptionId::new(1),
            PatientId::new(1),
            "Amoxicillin",
            now - Duration::days(10),
        ))?;
        self.prescriptions.add(Prescription::new(
            PrescriptionId::new(2),
            PatientId::new(2),
            "Ibuprofen",
            now - Duration::days(7),
        ))?;
        self.prescriptions.add(Prescription::new(
            PrescriptionId::new(3),
            PatientId::new(1),
            "Nexium",
            now - Duration::days(3),
        ))?;
        self.prescriptions.add(Prescription::new(
            PrescriptionId::new(4),
            PatientId::new(3),
            "Nugel-O",
            now - Duration::days(2),
        ))?;
        self.prescriptions.add(Prescription::new(
            PrescriptionId::new(5),
            PatientId::new(1),
            "Cetirizine",
            now - Duration::days(1),
        ))?;
        Ok(())
    }

    pub fn patients(&self) -> &Repository<Patient> {
        &self.patients
    }

    pub fn prescriptions(&self) -> &Repository<Prescription> {
        &self.prescriptions
    }

    /// Mutable prescription store. Mutations leave the index stale until the
    /// next [`rebuild_index`](Self::rebuild_index).
    pub fn prescriptions_mut(&mut self) -> &mut Repository<Prescription> {
        &mut self.prescriptions
    }

    /// Recompute the patient→prescriptions grouping from the store.
    pub fn rebuild_index(&mut self) {
        let mut index: HashMap<PatientId, Vec<Prescription>> = HashMap::new();
        for prescription in self.prescriptions.list_all() {
            index
                .entry(prescription.patient_id())
                .or_default()
                .push(prescription);
        }
        self.index = index;
    }

    /// Prescriptions for one patient. An unknown id yields an empty slice,
    /// not an error.
    pub fn prescriptions_for(&self, patient_id: PatientId) -> &[Prescription] {
        self.index
            .get(&patient_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::Entity;

    fn seeded() -> Clinic {
        let mut clinic = Clinic::new();
        clinic.seed().unwrap();
        clinic.rebuild_index();
        clinic
    }

    #[test]
    fn index_groups_prescriptions_by_patient() {
        let clinic = seeded();

        let mut meds: Vec<&str> = clinic
            .prescriptions_for(PatientId::new(1))
            .iter()
            .map(|p| p.medication())
            .collect();
        meds.sort();
        assert_eq!(meds, vec!["Amoxicillin", "Cetirizine", "Nexium"]);

        assert_eq!(clinic.prescriptions_for(PatientId::new(2)).len(), 1);
        assert_eq!(clinic.prescriptions_for(PatientId::new(3)).len(), 1);
    }

    #[test]
    fn unknown_patient_yields_empty_list() {
        let clinic = seeded();
        assert!(clinic.prescriptions_for(PatientId::new(42)).is_empty());
    }

    #[test]
    fn every_prescription_lands_under_its_own_patient() {
        let clinic = seeded();

        for prescription in clinic.prescriptions().list_all() {
            let bucket = clinic.prescriptions_for(prescription.patient_id());
            assert!(bucket.iter().any(|p| p.id() == prescription.id()));
        }

        let indexed: usize = clinic
            .patients()
            .list_all()
            .iter()
            .map(|p| clinic.prescriptions_for(p.id()).len())
            .sum();
        assert_eq!(indexed, clinic.prescriptions().len());
    }

    #[test]
    fn index_goes_stale_until_rebuilt() {
        let mut clinic = seeded();

        clinic
            .prescriptions_mut()
            .add(Prescription::new(
                PrescriptionId::new(6),
                PatientId::new(2),
                "Paracetamol",
                Utc::now(),
            ))
            .unwrap();

        // Not incrementally maintained.
        assert_eq!(clinic.prescriptions_for(PatientId::new(2)).len(), 1);

        clinic.rebuild_index();
        assert_eq!(clinic.prescriptions_for(PatientId::new(2)).len(), 2);
    }
}
