//! Registry entry types

use serde::{Deserialize, Serialize};

/// Sentinel id reported for names that no entry owns
pub const UNKNOWN_ID: &str = "Unknown";

/// Maximum number of variation columns carried per entry
pub const MAX_ALIASES: usize = 5;

/// One canonical record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    /// Alternate spellings in column order, blank slots omitted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Entry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    /// Add an alias, ignoring blank values and anything past the variation limit
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        if !alias.trim().is_empty() && self.aliases.len() < MAX_ALIASES {
            self.aliases.push(alias);
        }
        self
    }
}

/// An alias together with the id of the entry whose canonical name it equals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAlias {
    pub alias: String,
    pub id: String,
}

impl ResolvedAlias {
    /// True when the alias did not match any canonical name
    pub fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_ID
    }
}
