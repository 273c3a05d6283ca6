// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Same input, same output: across repeated runs, algorithms and threads.

use super::common::{cv_corpus, ranked_ids};
use cvrank::{search, Algorithm, SearchConfig, Searcher};

const KEYWORDS: [&str; 5] = ["python", "react", "sql", "javascript", "golang"];

#[test]
fn test_repeated_runs_identical() {
    let docs = cv_corpus();
    let config = SearchConfig::default();
    let first = search(&docs, &KEYWORDS, &config).unwrap();
    let second = search(&docs, &KEYWORDS, &config).unwrap();
    assert_eq!(first.results, second.results);
}

#[test]
fn test_algorithms_agree_on_results() {
    let docs = cv_corpus();
    let runs: Vec<_> = Algorithm::all()
        .into_iter()
        .map(|algorithm| {
            let config = SearchConfig::default().with_algorithm(algorithm);
            search(&docs, &KEYWORDS, &config).unwrap()
        })
        .collect();
    assert_eq!(runs[0].results, runs[1].results);
    assert_ne!(runs[0].timing.algorithm, runs[1].timing.algorithm);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential() {
    let docs = cv_corpus();
    for algorithm in Algorithm::all() {
        let searcher = Searcher::new(SearchConfig::default().with_algorithm(algorithm)).unwrap();
        let sequential = searcher.search(&docs, &KEYWORDS).unwrap();
        let parallel = searcher.search_parallel(&docs, &KEYWORDS).unwrap();
        assert_eq!(ranked_ids(&sequential), ranked_ids(&parallel));
        assert_eq!(sequential.results, parallel.results);
        assert_eq!(
            sequential.timing.documents_scanned,
            parallel.timing.documents_scanned
        );
    }
}

#[test]
fn test_duplicate_keyword_changes_score_not_evidence() {
    let docs = cv_corpus();
    let config = SearchConfig::default();
    let once = search(&docs, &["react"], &config).unwrap();
    let twice = search(&docs, &["react", "react"], &config).unwrap();

    assert_eq!(ranked_ids(&once), ranked_ids(&twice));
    for (a, b) in once.results.iter().zip(&twice.results) {
        assert_eq!(a.exact_matches, b.exact_matches);
        assert!(b.total_score > a.total_score);
    }
}
