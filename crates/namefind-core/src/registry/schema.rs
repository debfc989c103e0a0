//! Column layout resolution for raw tabular rows

use super::entry::MAX_ALIASES;
use super::error::{LookupError, LookupResult};

/// Header of the canonical name column
pub const NAME_COLUMN: &str = "Name";

/// Header of the identifier column
pub const ID_COLUMN: &str = "ID";

/// Header of the n-th variation column (1-based)
pub fn variation_column(n: usize) -> String {
    format!("Variation {}", n)
}

/// Positions of the known columns within a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: usize,
    pub id: usize,
    pub variations: [Option<usize>; MAX_ALIASES],
}

impl ColumnLayout {
    /// Locate the known columns in a header row.
    ///
    /// Headers are compared after trimming surrounding whitespace. Missing
    /// variation columns are fine; a missing `Name` or `ID` is a schema error.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> LookupResult<Self> {
        let position = |wanted: &str| headers.iter().position(|h| h.as_ref().trim() == wanted);

        let name = position(NAME_COLUMN);
        let id = position(ID_COLUMN);

        let (name, id) = match (name, id) {
            (Some(name), Some(id)) => (name, id),
            (name, id) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push(NAME_COLUMN.to_string());
                }
                if id.is_none() {
                    missing.push(ID_COLUMN.to_string());
                }
                return Err(LookupError::Schema { missing });
            }
        };

        let mut variations = [None; MAX_ALIASES];
        for (slot, variation) in variations.iter_mut().enumerate() {
            *variation = position(&variation_column(slot + 1));
        }

        Ok(Self {
            name,
            id,
            variations,
        })
    }
}
