//! Roster ingestion from CSV

use std::fs::File;
use std::io::Read;
use std::path::Path;

use namefind_core::Registry;
use tracing::{debug, info};

use crate::error::Result;

/// Load a roster file and build the registry from it.
pub fn load_registry(path: &Path) -> Result<Registry> {
    let file = File::open(path)?;
    let registry = registry_from_reader(file)?;
    info!(
        path = %path.display(),
        entries = registry.len(),
        "Roster loaded"
    );
    Ok(registry)
}

/// Build a registry from CSV text with a header row.
///
/// Records may have fewer cells than the header; missing cells count as blank.
pub fn registry_from_reader<R: Read>(reader: R) -> Result<Registry> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        // Excel exports prefix a BOM
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<String>>());
    }

    let total = rows.len();
    let registry = Registry::build(&headers, rows)?;
    debug!(
        rows = total,
        dropped = total - registry.len(),
        "Parsed roster rows"
    );
    Ok(registry)
}
