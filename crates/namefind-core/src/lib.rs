//! namefind core engine
//!
//! Name registry and fuzzy match ranking for provider lookups. The crate has
//! no I/O: callers load tabular data however they like, build a
//! [`Registry`] from header and row cells, and query it with
//! [`MatchEngine`].
//!
//! # Features
//!
//! - `parallel` - Score large registries in parallel via rayon
//!
//! # Example
//!
//! ```rust
//! use namefind_core::{search_with_aliases, Registry, SearchOptions};
//!
//! let registry = Registry::build(
//!     &["Name", "ID", "Variation 1"],
//!     vec![
//!         vec!["Jon Smith", "1", "Jonathan Smith"],
//!         vec!["Jonathan Smith", "2", ""],
//!     ],
//! )
//! .unwrap();
//!
//! let aliased = search_with_aliases("Jon Smith", &registry, &SearchOptions::default()).unwrap();
//! assert!(aliased.result.is_exact());
//! assert_eq!(aliased.unique_aliases().count(), 1);
//! ```

pub mod fuzzy;
pub mod registry;

// Re-export main types at crate root
pub use fuzzy::{
    search, search_with_aliases, AliasedResult, Candidate, EntryAliases, MatchEngine,
    MatchResult, Scorer, SearchOptions,
};
pub use registry::{Entry, LookupError, LookupResult, Registry, ResolvedAlias, UNKNOWN_ID};
