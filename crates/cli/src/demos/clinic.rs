use anyhow::Result;

use tally_clinic::Clinic;
use tally_core::PatientId;

pub fn run() -> Result<()> {
    println!("\n=== Clinic ===");

    let mut clinic = Clinic::new();
    clinic.seed()?;
    clinic.rebuild_index();

    println!("----- All Patients -----");
    for patient in clinic.patients().list_all() {
        println!("{patient}");
    }

    for id in [PatientId::new(1), PatientId::new(42)] {
        let prescriptions = clinic.prescriptions_for(id);
        if prescriptions.is_empty() {
            println!("No prescriptions found for patient ID {id}.");
        } else {
            println!("Prescriptions for patient ID {id}:");
            for prescription in prescriptions {
                println!("  {prescription}");
            }
        }
    }

    Ok(())
}
