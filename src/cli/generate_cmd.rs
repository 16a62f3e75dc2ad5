//! `atlas generate`: render the persisted catalog into a static report.

use crate::report;
use crate::store;
use anyhow::Result;
use std::path::Path;

/// Run the generate command.
pub async fn run(input: &Path, out: &Path, quiet: bool) -> Result<()> {
    let catalog = store::load_catalog(input)?;
    report::write_report(out, &catalog)?;

    if !quiet {
        eprintln!(
            "  Rendered {} families to {}",
            catalog.len(),
            out.display()
        );
    }

    Ok(())
}
