//! Result export as a one-row CSV

use std::fs::File;
use std::io::Write;
use std::path::Path;

use namefind_core::MatchResult;
use serde::Serialize;
use tracing::info;

use crate::error::Result;

/// Separator for multi-value cells
const LIST_SEPARATOR: &str = ", ";

/// One exported search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Searched Name")]
    pub searched_name: String,
    #[serde(rename = "Exact Matches")]
    pub exact_matches: String,
    #[serde(rename = "Matched IDs")]
    pub matched_ids: String,
    #[serde(rename = "Similar Names")]
    pub similar_names: String,
    #[serde(rename = "Similar IDs")]
    pub similar_ids: String,
}

impl ExportRow {
    pub fn from_result(query: &str, result: &MatchResult) -> Self {
        let mut row = Self {
            searched_name: query.to_string(),
            exact_matches: String::new(),
            matched_ids: String::new(),
            similar_names: String::new(),
            similar_ids: String::new(),
        };

        match result {
            MatchResult::ExactMatches(entries) => {
                row.exact_matches = join(entries.iter().map(|e| e.name.as_str()));
                row.matched_ids = join(entries.iter().map(|e| e.id.as_str()));
            }
            MatchResult::FuzzyMatches(candidates) => {
                row.similar_names = join(candidates.iter().map(|c| c.name.as_str()));
                row.similar_ids = join(candidates.iter().map(|c| c.id.as_str()));
            }
            MatchResult::NoMatch => {}
        }

        row
    }
}

fn join<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(LIST_SEPARATOR)
}

/// Write the header and a single row.
pub fn write_row<W: Write>(writer: W, row: &ExportRow) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);
    csv_writer.serialize(row)?;
    csv_writer.flush()?;
    Ok(())
}

/// Export a search result to `path`, replacing any existing file.
pub fn export_result(path: &Path, query: &str, result: &MatchResult) -> Result<()> {
    let row = ExportRow::from_result(query, result);
    write_row(File::create(path)?, &row)?;
    info!(path = %path.display(), query, "Exported search result");
    Ok(())
}
