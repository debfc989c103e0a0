//! Lookup error types

use thiserror::Error;

/// Errors raised by registry construction and search.
///
/// Everything else ("no match", "no aliases", unresolved alias owners) is a
/// normal value, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Required columns are absent from the source data
    #[error("missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// Search was invoked with a blank or whitespace-only query
    #[error("query is empty")]
    EmptyQuery,
}

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;
