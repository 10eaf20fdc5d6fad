use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use tally_grading::{read_students, write_report};

pub fn run(scratch: &Path) -> Result<()> {
    println!("\n=== Grading ===");

    let input = scratch.join("students.txt");
    let output = scratch.join("report.txt");

    fs::write(&input, "1,Ama Mensah,84\n2,Kofi Boateng,61\n3,Esi Owusu,45\n")
        .with_context(|| format!("writing {}", input.display()))?;

    let students = read_students(&input).context("reading student results")?;
    write_report(&students, &output).context("writing the report")?;
    println!(
        "Report for {} students generated at {}",
        students.len(),
        output.display()
    );

    // A malformed line aborts the whole read; nothing is emitted for the
    // well-formed lines around it.
    let bad = scratch.join("students-bad.txt");
    fs::write(&bad, "1,Ama Mensah,84\n2,Kofi Boateng\n")
        .with_context(|| format!("writing {}", bad.display()))?;
    if let Err(e) = read_students(&bad) {
        tracing::warn!("rejected {}: {e}", bad.display());
    }

    Ok(())
}
