//! Match engine
//!
//! Two sequential phases per query:
//!
//! 1. Exact phase: the trimmed query is compared against canonical names
//!    (case-sensitive by default). Any hit returns immediately.
//! 2. Fuzzy phase: every canonical name is scored with a [`Scorer`]
//!    (normalized Levenshtein ratio by default), filtered by `min_score`,
//!    stable-sorted by descending score and truncated to `limit`.
//!
//! # Example
//!
//! ```rust
//! use namefind_core::fuzzy::{search, MatchResult, SearchOptions};
//! use namefind_core::registry::{Entry, Registry};
//!
//! let registry = Registry::from_entries(vec![
//!     Entry::new("1", "Jon Smith"),
//!     Entry::new("2", "Jonathan Smith"),
//! ]);
//!
//! let result = search("Jon Smyth", &registry, &SearchOptions::default()).unwrap();
//! match result {
//!     MatchResult::FuzzyMatches(candidates) => assert_eq!(candidates[0].id, "1"),
//!     _ => unreachable!(),
//! }
//! ```

mod engine;
mod scoring;

pub use engine::{
    search, search_with_aliases, AliasedResult, Candidate, EntryAliases, MatchEngine,
    MatchResult, SearchOptions, DEFAULT_LIMIT, DEFAULT_PARALLEL_THRESHOLD,
};
pub use scoring::{levenshtein_ratio, LevenshteinRatio, Scorer, MAX_SCORE};
