//! `atlas parse`: scrape every interface family and persist the catalog.

use crate::catalog::{self, BASE_URL};
use crate::fetch::HttpClient;
use crate::store;
use anyhow::Result;
use std::path::Path;

/// Run the parse command.
pub async fn run(out: &Path, timeout_ms: u64, quiet: bool) -> Result<()> {
    let client = HttpClient::new(timeout_ms);
    let catalog = catalog::build_catalog(&client, BASE_URL).await?;
    store::save_catalog(out, &catalog)?;

    if !quiet {
        let entry_count: usize = catalog.iter().map(|f| f.entries.len()).sum();
        eprintln!(
            "  Wrote {} families ({} entries) to {}",
            catalog.len(),
            entry_count,
            out.display()
        );
    }

    Ok(())
}
