//! Name registry
//!
//! The registry holds the canonical dataset: one [`Entry`] per source row that
//! carries a non-blank name, in load order. It is built once and never mutated
//! afterwards, so a single instance can be shared across threads and queried
//! concurrently.
//!
//! # Example
//!
//! ```rust
//! use namefind_core::registry::{Registry, UNKNOWN_ID};
//!
//! let registry = Registry::build(
//!     &["ID", "Name", "Variation 1"],
//!     vec![
//!         vec!["1", "Jon Smith", "Jonathan Smith"],
//!         vec!["2", "Jonathan Smith", ""],
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(registry.find_exact_by_name(" Jon Smith ").len(), 1);
//! assert_eq!(registry.resolve_alias_owner("Jonathan Smith"), "2");
//! assert_eq!(registry.resolve_alias_owner("J. Smith"), UNKNOWN_ID);
//! ```

mod entry;
mod error;
mod schema;

pub use entry::{Entry, ResolvedAlias, MAX_ALIASES, UNKNOWN_ID};
pub use error::{LookupError, LookupResult};
pub use schema::{variation_column, ColumnLayout, ID_COLUMN, NAME_COLUMN};

use ahash::AHashMap;
use tracing::{debug, warn};

/// Immutable in-memory table of canonical entries
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Entry>,
    by_name: AHashMap<String, Vec<usize>>,
    by_id: AHashMap<String, usize>,
}

impl Registry {
    /// Build a registry from a header row and raw data rows.
    ///
    /// Fails with [`LookupError::Schema`] when `Name` or `ID` is missing from
    /// the headers. Rows whose name cell is missing or blank are dropped.
    /// Short rows are treated as having blank trailing cells.
    pub fn build<H, I, R, S>(headers: &[H], rows: I) -> LookupResult<Self>
    where
        H: AsRef<str>,
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let layout = ColumnLayout::resolve(headers)?;

        let mut entries = Vec::new();
        let mut dropped = 0usize;

        for (row_idx, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let cell = |idx: usize| row.get(idx).map(|c| c.as_ref()).unwrap_or("");

            let name = cell(layout.name);
            if name.trim().is_empty() {
                dropped += 1;
                debug!(row = row_idx, "Dropping row with blank name");
                continue;
            }

            let id = cell(layout.id);
            if id.trim().is_empty() {
                warn!(row = row_idx, name = %name, "Entry has a blank ID");
            }

            let mut entry = Entry::new(id, name);
            for idx in layout.variations.iter().flatten() {
                entry = entry.alias(cell(*idx));
            }
            entries.push(entry);
        }

        debug!(entries = entries.len(), dropped, "Registry built");
        Ok(Self::from_entries(entries))
    }

    /// Build a registry from already-shaped entries, preserving their order
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut by_name: AHashMap<String, Vec<usize>> = AHashMap::with_capacity(entries.len());
        let mut by_id: AHashMap<String, usize> = AHashMap::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            by_name.entry(entry.name.clone()).or_default().push(idx);
            if by_id.contains_key(&entry.id) {
                warn!(id = %entry.id, name = %entry.name, "Duplicate ID, lookups return the first entry");
            } else {
                by_id.insert(entry.id.clone(), idx);
            }
        }

        Self {
            entries,
            by_name,
            by_id,
        }
    }

    /// Look up an entry by identifier (first one if ids repeat)
    pub fn find_by_id(&self, id: &str) -> Option<&Entry> {
        self.by_id.get(id).map(|&idx| &self.entries[idx])
    }

    /// All entries whose canonical name equals the trimmed query exactly.
    ///
    /// Only the query is trimmed; stored names are compared verbatim.
    pub fn find_exact_by_name(&self, query: &str) -> Vec<&Entry> {
        self.by_name
            .get(query.trim())
            .map(|indexes| indexes.iter().map(|&idx| &self.entries[idx]).collect())
            .unwrap_or_default()
    }

    /// First entry whose canonical name equals `name` verbatim, no trimming
    pub fn first_by_name(&self, name: &str) -> Option<&Entry> {
        self.by_name
            .get(name)
            .and_then(|indexes| indexes.first())
            .map(|&idx| &self.entries[idx])
    }

    /// Case-insensitive variant of [`Registry::find_exact_by_name`]
    pub fn find_by_name_ignore_case(&self, query: &str) -> Vec<&Entry> {
        let query_lower = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase() == query_lower)
            .collect()
    }

    /// Canonical names in registry order
    pub fn all_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Id of the entry whose canonical name equals `alias`, or [`UNKNOWN_ID`]
    pub fn resolve_alias_owner(&self, alias: &str) -> &str {
        self.first_by_name(alias)
            .map(|e| e.id.as_str())
            .unwrap_or(UNKNOWN_ID)
    }

    /// Resolve every alias of `entry` against this registry
    pub fn resolve_aliases(&self, entry: &Entry) -> Vec<ResolvedAlias> {
        entry
            .aliases
            .iter()
            .map(|alias| ResolvedAlias {
                alias: alias.clone(),
                id: self.resolve_alias_owner(alias).to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
