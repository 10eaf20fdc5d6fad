//! Demo binary: runs each domain scenario in sequence.
//!
//! Expected failures inside a scenario (duplicate adds, unknown ids, bad
//! quantities, malformed input lines) are reported and never fatal; only a
//! broken scenario itself aborts the run.

use anyhow::{Context, Result};

mod demos;

fn main() -> Result<()> {
    tally_observability::init();

    let scratch = std::env::temp_dir().join("tally-demos");
    std::fs::create_dir_all(&scratch)
        .with_context(|| format!("creating scratch directory {}", scratch.display()))?;

    demos::warehouse::run()?;
    demos::finance::run()?;
    demos::clinic::run()?;
    demos::grading::run(&scratch)?;
    demos::inventory::run(&scratch)?;

    Ok(())
}
