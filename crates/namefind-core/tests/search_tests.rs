//! Search behavior tests for MatchEngine

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use namefind_core::fuzzy::levenshtein_ratio;
use namefind_core::{
    Candidate, Entry, MatchEngine, MatchResult, Registry, ResolvedAlias, Scorer, SearchOptions,
    UNKNOWN_ID,
};
use pretty_assertions::assert_eq;

/// Scorer that counts how often it is called
#[derive(Default)]
struct CountingScorer {
    calls: AtomicUsize,
}

impl Scorer for CountingScorer {
    fn score(&self, query: &str, candidate: &str) -> u8 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        levenshtein_ratio(query, candidate)
    }
}

/// Scorer that gives every candidate the same score
struct ConstantScorer(u8);

impl Scorer for ConstantScorer {
    fn score(&self, _query: &str, _candidate: &str) -> u8 {
        self.0
    }
}

fn providers() -> Registry {
    Registry::from_entries(vec![
        Entry::new("P-100", "Redbridge Health Partners")
            .alias("Redbridge Health")
            .alias("RHP"),
        Entry::new("P-101", "Redbridge Family Clinic").alias("Redbridge Health"),
        Entry::new("P-102", "Bluewater Medical Group").alias("Bluewater Medical"),
        Entry::new("P-103", "Bluewater Medical").alias("Bluewater Medical Group"),
        Entry::new("P-104", "Northside Pediatrics"),
        Entry::new("P-105", "Southside Pediatrics"),
        Entry::new("P-106", "Eastside Pediatrics"),
    ])
}

fn candidates(result: MatchResult) -> Vec<Candidate> {
    match result {
        MatchResult::FuzzyMatches(candidates) => candidates,
        other => panic!("expected fuzzy matches, got {:?}", other),
    }
}

#[test]
fn test_exact_match_never_scores() {
    let engine = MatchEngine::with_scorer(CountingScorer::default());
    let registry = providers();

    for name in registry.all_names() {
        let result = engine
            .search(name, &registry, &SearchOptions::default())
            .unwrap();
        match result {
            MatchResult::ExactMatches(entries) => {
                assert!(entries.iter().any(|e| e.name == name));
            }
            other => panic!("expected exact match for {}, got {:?}", name, other),
        }
    }

    assert_eq!(engine.scorer().calls.load(Ordering::Relaxed), 0);
}

#[test]
fn test_fuzzy_scores_every_name_once() {
    let engine = MatchEngine::with_scorer(CountingScorer::default());
    let registry = providers();

    engine
        .search("Redbridge", &registry, &SearchOptions::default())
        .unwrap();

    assert_eq!(engine.scorer().calls.load(Ordering::Relaxed), registry.len());
}

#[test]
fn test_scores_non_increasing() {
    let registry = providers();
    let engine = MatchEngine::new();
    let options = SearchOptions::new().limit(registry.len());

    for query in ["Pediatrics", "Redbridge Helth", "bluewater", "x"] {
        let ranked = candidates(engine.search(query, &registry, &options).unwrap());
        assert!(
            ranked.windows(2).all(|w| w[0].score >= w[1].score),
            "unsorted for {}: {:?}",
            query,
            ranked
        );
    }
}

#[test]
fn test_ties_keep_registry_order() {
    let registry = providers();
    let engine = MatchEngine::with_scorer(ConstantScorer(50));
    let options = SearchOptions::new().limit(registry.len());

    let ranked = candidates(engine.search("anything", &registry, &options).unwrap());
    let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, registry.all_names());
}

#[test]
fn test_ties_from_real_scores() {
    // The names differ only in letters the query does not contain
    let registry = Registry::from_entries(vec![
        Entry::new("b", "Southside"),
        Entry::new("a", "Northside"),
    ]);
    let ranked = candidates(
        MatchEngine::new()
            .search("Westside", &registry, &SearchOptions::default())
            .unwrap(),
    );
    assert_eq!(ranked[0].score, ranked[1].score);
    assert_eq!(ranked[0].name, "Southside");
    assert_eq!(ranked[1].name, "Northside");
}

#[test]
fn test_limit_respected() {
    let registry = providers();
    for limit in 1..=registry.len() + 2 {
        let options = SearchOptions::new().limit(limit);
        let result = MatchEngine::new()
            .search("Pediatric", &registry, &options)
            .unwrap();
        assert!(result.len() <= limit);
        assert_eq!(result.len(), limit.min(registry.len()));
    }
}

#[test]
fn test_default_limit_is_five() {
    let result = MatchEngine::new()
        .search("Clinic", &providers(), &SearchOptions::default())
        .unwrap();
    assert_eq!(result.len(), 5);
}

#[test]
fn test_min_score_respected() {
    let registry = providers();
    for min_score in [0u8, 30, 50, 70, 90, 100] {
        let options = SearchOptions::new().min_score(min_score).limit(100);
        match MatchEngine::new()
            .search("Northside Pediatric", &registry, &options)
            .unwrap()
        {
            MatchResult::FuzzyMatches(ranked) => {
                assert!(ranked.iter().all(|c| c.score >= min_score));
            }
            MatchResult::NoMatch => {}
            MatchResult::ExactMatches(_) => panic!("unexpected exact match"),
        }
    }
}

#[test]
fn test_threshold_with_limit() {
    let registry = Registry::from_entries(vec![
        Entry::new("1", "zzzzzzzz"),
        Entry::new("2", "yyyyyyyy"),
        Entry::new("3", "Northside Pediatrics"),
    ]);
    let options = SearchOptions::new().limit(1).min_score(50);
    let ranked = candidates(
        MatchEngine::new()
            .search("Northside Pediatric", &registry, &options)
            .unwrap(),
    );
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].id, "3");
}

#[test]
fn test_duplicate_names_resolve_to_first_id() {
    let registry = Registry::from_entries(vec![
        Entry::new("10", "Ana Lopez"),
        Entry::new("11", "Ana Lopez"),
    ]);
    let ranked = candidates(
        MatchEngine::new()
            .search("Ana Lopes", &registry, &SearchOptions::default())
            .unwrap(),
    );
    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|c| c.id == "10"));
}

#[test]
fn test_exact_duplicates_all_returned() {
    let registry = Registry::from_entries(vec![
        Entry::new("10", "Ana Lopez"),
        Entry::new("11", "Ana Lopez"),
    ]);
    let result = MatchEngine::new()
        .search("Ana Lopez", &registry, &SearchOptions::default())
        .unwrap();
    match result {
        MatchResult::ExactMatches(entries) => {
            let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, vec!["10", "11"]);
        }
        other => panic!("expected exact matches, got {:?}", other),
    }
}

#[test]
fn test_alias_dedup_across_entries() {
    let registry = providers();
    let options = SearchOptions::new().limit(2);
    let aliased = MatchEngine::new()
        .search_with_aliases("Redbridge Health Partner", &registry, &options)
        .unwrap();

    let ids: Vec<&str> = aliased.aliases.iter().map(|e| e.entry_id.as_str()).collect();
    assert_eq!(ids, vec!["P-100", "P-101"]);

    // "Redbridge Health" belongs to both, reported once under the first entry
    assert_eq!(
        aliased.aliases[0].aliases,
        vec![
            ResolvedAlias {
                alias: "Redbridge Health".to_string(),
                id: UNKNOWN_ID.to_string()
            },
            ResolvedAlias {
                alias: "RHP".to_string(),
                id: UNKNOWN_ID.to_string()
            },
        ]
    );
    assert!(aliased.aliases[1].aliases.is_empty());

    let unique: Vec<&str> = aliased.unique_aliases().map(|a| a.alias.as_str()).collect();
    assert_eq!(unique, vec!["Redbridge Health", "RHP"]);
}

#[test]
fn test_alias_cross_references() {
    let registry = providers();
    let options = SearchOptions::new().limit(2).min_score(60);
    let aliased = MatchEngine::new()
        .search_with_aliases("Bluewater Medical Grp", &registry, &options)
        .unwrap();

    let resolved: Vec<(&str, &str)> = aliased
        .unique_aliases()
        .map(|a| (a.alias.as_str(), a.id.as_str()))
        .collect();
    assert_eq!(
        resolved,
        vec![
            ("Bluewater Medical", "P-103"),
            ("Bluewater Medical Group", "P-102"),
        ]
    );
}

#[test]
fn test_alias_fanout_visits_entry_once() {
    let registry = Registry::from_entries(vec![
        Entry::new("10", "Ana Lopez").alias("Anna Lopez"),
        Entry::new("11", "Ana Lopez").alias("A. Lopez"),
    ]);
    let aliased = MatchEngine::new()
        .search_with_aliases("Ana Lopes", &registry, &SearchOptions::default())
        .unwrap();
    assert_eq!(aliased.aliases.len(), 1);
    assert_eq!(aliased.aliases[0].entry_id, "10");
}

#[test]
fn test_alias_fanout_with_blank_ids() {
    let registry = Registry::from_entries(vec![
        Entry::new("", "Alpha Clinic").alias("Alpha Care"),
        Entry::new("", "Beta Clinic").alias("Beta Care"),
    ]);
    let options = SearchOptions::new().limit(1);
    let aliased = MatchEngine::new()
        .search_with_aliases("Beta Clinik", &registry, &options)
        .unwrap();

    let ranked = candidates(aliased.result.clone());
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].name, "Beta Clinic");

    let unique: Vec<&str> = aliased.unique_aliases().map(|a| a.alias.as_str()).collect();
    assert_eq!(unique, vec!["Beta Care"]);
}

#[test]
fn test_alias_fanout_with_colliding_ids() {
    let registry = Registry::from_entries(vec![
        Entry::new("7", "Alpha Clinic").alias("Alpha Care"),
        Entry::new("7", "Beta Clinic").alias("Beta Care"),
    ]);
    let options = SearchOptions::new().limit(2);
    let aliased = MatchEngine::new()
        .search_with_aliases("Beta Clinik", &registry, &options)
        .unwrap();

    // Both entries are candidates, so both contribute their variations
    let unique: Vec<&str> = aliased.unique_aliases().map(|a| a.alias.as_str()).collect();
    assert_eq!(unique, vec!["Beta Care", "Alpha Care"]);
}

#[test]
fn test_parallel_matches_sequential() {
    let names: Vec<Entry> = (0..300)
        .map(|i| Entry::new(format!("{}", i), format!("Provider {:03}", i % 97)))
        .collect();
    let registry = Registry::from_entries(names);
    let options = SearchOptions::new().limit(25);

    let sequential = MatchEngine::new().parallel_threshold(usize::MAX);
    let parallel = MatchEngine::new().parallel_threshold(0);

    for query in ["Provider 42", "Provider 4x2", "Prov", "provider 042"] {
        let expected = sequential.search(query, &registry, &options).unwrap();
        let actual = parallel.search(query, &registry, &options).unwrap();
        assert!(expected.is_fuzzy());
        assert_eq!(expected, actual, "query {}", query);
    }
}

#[test]
fn test_registry_shared_across_threads() {
    let registry = Arc::new(providers());
    let handles: Vec<_> = ["Northside", "Southside", "Eastside", "Westside"]
        .into_iter()
        .map(|query| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                MatchEngine::new()
                    .search(query, &registry, &SearchOptions::default())
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert!(result.is_fuzzy());
    }
}
