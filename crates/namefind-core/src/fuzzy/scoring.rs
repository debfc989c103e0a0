//! Similarity scoring
//!
//! Scores are integers in `0..=100`. The default scorer is the normalized
//! Levenshtein ratio, which is case-sensitive and symmetric.

use strsim::levenshtein;

/// Upper bound of every score
pub const MAX_SCORE: u8 = 100;

/// Similarity function used by the fuzzy phase.
///
/// Implementations must be total over any pair of strings and must return
/// `MAX_SCORE` for identical strings.
pub trait Scorer: Send + Sync {
    fn score(&self, query: &str, candidate: &str) -> u8;
}

/// `100 * (1 - levenshtein(a, b) / max(len(a), len(b)))`, rounded
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinRatio;

impl Scorer for LevenshteinRatio {
    #[inline]
    fn score(&self, query: &str, candidate: &str) -> u8 {
        levenshtein_ratio(query, candidate)
    }
}

/// Normalized edit-distance similarity.
///
/// Lengths are counted in chars to agree with `strsim::levenshtein`. Two empty
/// strings are identical and score 100.
pub fn levenshtein_ratio(a: &str, b: &str) -> u8 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return MAX_SCORE;
    }

    let edit_dist = levenshtein(a, b);
    let ratio = 1.0 - edit_dist as f64 / max_len as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

impl<F> Scorer for F
where
    F: Fn(&str, &str) -> u8 + Send + Sync,
{
    fn score(&self, query: &str, candidate: &str) -> u8 {
        self(query, candidate).min(MAX_SCORE)
    }
}
