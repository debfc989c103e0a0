//! MatchEngine - exact phase, fuzzy ranking, alias fan-out

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scoring::{LevenshteinRatio, Scorer, MAX_SCORE};
use crate::registry::{Entry, LookupError, LookupResult, Registry, ResolvedAlias, UNKNOWN_ID};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default number of fuzzy candidates returned
pub const DEFAULT_LIMIT: usize = 5;

/// Candidate count at which scoring moves to rayon
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// A ranked approximate match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub score: u8,
    pub id: String,
}

/// Outcome of a single search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "matches", rename_all = "snake_case")]
pub enum MatchResult {
    /// Entries whose canonical name equals the query
    ExactMatches(Vec<Entry>),
    /// Approximate candidates, best first
    FuzzyMatches(Vec<Candidate>),
    NoMatch,
}

impl MatchResult {
    pub fn is_exact(&self) -> bool {
        matches!(self, MatchResult::ExactMatches(_))
    }

    pub fn is_fuzzy(&self) -> bool {
        matches!(self, MatchResult::FuzzyMatches(_))
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, MatchResult::NoMatch)
    }

    /// Number of exact entries or fuzzy candidates
    pub fn len(&self) -> usize {
        match self {
            MatchResult::ExactMatches(entries) => entries.len(),
            MatchResult::FuzzyMatches(candidates) => candidates.len(),
            MatchResult::NoMatch => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Aliases of one matched entry, after cross-entry deduplication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAliases {
    pub entry_id: String,
    pub aliases: Vec<ResolvedAlias>,
}

/// A match result together with the alias fan-out of its entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasedResult {
    pub result: MatchResult,
    /// One item per matched entry, in result order
    pub aliases: Vec<EntryAliases>,
}

impl AliasedResult {
    /// Every reported alias in first-seen order
    pub fn unique_aliases(&self) -> impl Iterator<Item = &ResolvedAlias> {
        self.aliases.iter().flat_map(|e| e.aliases.iter())
    }
}

/// Per-query search options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum fuzzy candidates, values below 1 act as 1
    pub limit: usize,
    /// Minimum fuzzy score, values above 100 act as 100
    pub min_score: u8,
    /// Compare case in the exact phase
    pub case_sensitive_exact: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_score: 0,
            case_sensitive_exact: true,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn min_score(mut self, min_score: u8) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn case_sensitive_exact(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive_exact = case_sensitive;
        self
    }

    fn effective_limit(&self) -> usize {
        self.limit.max(1)
    }

    fn effective_min_score(&self) -> u8 {
        self.min_score.min(MAX_SCORE)
    }
}

/// Stateless matcher over an immutable [`Registry`].
///
/// With the `parallel` feature, candidate scoring runs on rayon once the
/// registry reaches `parallel_threshold` names. Scores are collected in
/// registry order either way, so output is identical.
#[derive(Debug, Clone)]
pub struct MatchEngine<S = LevenshteinRatio> {
    scorer: S,
    parallel_threshold: usize,
}

impl Default for MatchEngine<LevenshteinRatio> {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine<LevenshteinRatio> {
    /// Engine with the normalized Levenshtein scorer
    pub fn new() -> Self {
        Self::with_scorer(LevenshteinRatio)
    }
}

impl<S: Scorer> MatchEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Classify `query` against the registry.
    ///
    /// Exact hits short-circuit: when the exact phase finds anything the
    /// scorer is never called. Returns [`LookupError::EmptyQuery`] for blank
    /// input.
    pub fn search(
        &self,
        query: &str,
        registry: &Registry,
        options: &SearchOptions,
    ) -> LookupResult<MatchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let exact = if options.case_sensitive_exact {
            registry.find_exact_by_name(query)
        } else {
            registry.find_by_name_ignore_case(query)
        };
        if !exact.is_empty() {
            debug!(query, count = exact.len(), "Exact match");
            return Ok(MatchResult::ExactMatches(exact.into_iter().cloned().collect()));
        }

        let candidates = self.rank(query, registry, options);
        debug!(
            query,
            candidates = candidates.len(),
            universe = registry.len(),
            "Fuzzy phase complete"
        );

        if candidates.is_empty() {
            Ok(MatchResult::NoMatch)
        } else {
            Ok(MatchResult::FuzzyMatches(candidates))
        }
    }

    /// [`MatchEngine::search`] plus the deduplicated aliases of every
    /// matched entry.
    ///
    /// An alias string is reported once, under the first entry (in result
    /// order) that carries it. Each entry appears at most once, even when
    /// several candidates share its name.
    pub fn search_with_aliases(
        &self,
        query: &str,
        registry: &Registry,
        options: &SearchOptions,
    ) -> LookupResult<AliasedResult> {
        let result = self.search(query, registry, options)?;

        // Candidates map back through their name, the same lookup that gave
        // them their id. Ids may be blank or repeated.
        let matched: Vec<&Entry> = match &result {
            MatchResult::ExactMatches(entries) => entries.iter().collect(),
            MatchResult::FuzzyMatches(candidates) => candidates
                .iter()
                .filter_map(|c| registry.first_by_name(&c.name))
                .collect(),
            MatchResult::NoMatch => Vec::new(),
        };

        let mut seen_entries: AHashSet<*const Entry> = AHashSet::new();
        let mut seen_aliases: AHashSet<String> = AHashSet::new();
        let mut aliases = Vec::new();

        for entry in matched {
            if !seen_entries.insert(entry as *const Entry) {
                continue;
            }
            let fresh: Vec<ResolvedAlias> = registry
                .resolve_aliases(entry)
                .into_iter()
                .filter(|resolved| seen_aliases.insert(resolved.alias.clone()))
                .collect();
            aliases.push(EntryAliases {
                entry_id: entry.id.clone(),
                aliases: fresh,
            });
        }

        Ok(AliasedResult { result, aliases })
    }

    /// Score, filter, stable-sort and truncate the candidate universe
    fn rank(&self, query: &str, registry: &Registry, options: &SearchOptions) -> Vec<Candidate> {
        let names = registry.all_names();
        let scores = self.score_names(query, &names);
        let min_score = options.effective_min_score();

        let mut ranked: Vec<(&str, u8)> = names
            .into_iter()
            .zip(scores)
            .filter(|&(_, score)| score >= min_score)
            .collect();

        // Stable: equal scores keep registry order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(options.effective_limit());

        ranked
            .into_iter()
            .map(|(name, score)| Candidate {
                name: name.to_string(),
                score,
                id: registry
                    .first_by_name(name)
                    .map(|e| e.id.clone())
                    .unwrap_or_else(|| UNKNOWN_ID.to_string()),
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_names(&self, query: &str, names: &[&str]) -> Vec<u8> {
        if names.len() >= self.parallel_threshold {
            names
                .par_iter()
                .map(|name| self.scorer.score(query, name).min(MAX_SCORE))
                .collect()
        } else {
            self.score_sequential(query, names)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_names(&self, query: &str, names: &[&str]) -> Vec<u8> {
        self.score_sequential(query, names)
    }

    fn score_sequential(&self, query: &str, names: &[&str]) -> Vec<u8> {
        names
            .iter()
            .map(|name| self.scorer.score(query, name).min(MAX_SCORE))
            .collect()
    }
}

/// Search with the default engine
pub fn search(
    query: &str,
    registry: &Registry,
    options: &SearchOptions,
) -> LookupResult<MatchResult> {
    MatchEngine::new().search(query, registry, options)
}

/// Alias-aware search with the default engine
pub fn search_with_aliases(
    query: &str,
    registry: &Registry,
    options: &SearchOptions,
) -> LookupResult<AliasedResult> {
    MatchEngine::new().search_with_aliases(query, registry, options)
}
