//! Catalog persistence: one JSON document, whole-file overwrite.
//!
//! No schema versioning. The on-disk field names are pinned by the serde
//! renames in [`crate::catalog`] and must match what the render phase
//! expects.

use crate::catalog::{Catalog, InterfaceFamily};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Default catalog file name, written to the working directory.
pub const RESULTS_JSON: &str = "scrape_results.json";

/// Write the catalog as pretty-printed JSON (2-space indent).
pub fn save_catalog(path: &Path, catalog: &[InterfaceFamily]) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog).context("failed to serialize catalog")?;
    fs::write(path, json).with_context(|| format!("failed to write catalog to {}", path.display()))
}

/// Read a previously saved catalog back.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse catalog JSON in {}", path.display()))
}
