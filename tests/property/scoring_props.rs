// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Score and ranking invariants over random corpora.

use super::common::make_corpus;
use cvrank::scoring::{COVERAGE_POINTS, COVERAGE_WEIGHT, EXACT_KEYWORD_CAP, FUZZY_HIT_POINTS, FUZZY_WEIGHT};
use cvrank::{relevance_score, search, ExactMatches, FuzzyMatches, SearchConfig};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,7}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..12).prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(text_strategy(), 0..8)
}

fn keywords_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Results are positive, descending, and within the largest possible score.
    #[test]
    fn prop_ranked_and_bounded(texts in corpus_strategy(), keywords in keywords_strategy()) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let docs = make_corpus(&refs);
        let run = search(&docs, &keywords, &SearchConfig::default()).unwrap();

        let per_keyword = EXACT_KEYWORD_CAP.max(FUZZY_HIT_POINTS * FUZZY_WEIGHT);
        let ceiling = keywords.len() as f64 * per_keyword + COVERAGE_POINTS * COVERAGE_WEIGHT;

        for pair in run.results.windows(2) {
            prop_assert!(pair[0].total_score >= pair[1].total_score);
        }
        for scored in &run.results {
            prop_assert!(scored.total_score > 0.0);
            prop_assert!(scored.total_score <= ceiling + 0.01);
        }
        prop_assert_eq!(run.timing.documents_scanned, docs.len());
        prop_assert_eq!(run.timing.results_returned, run.results.len());
    }

    /// Fuzzy evidence never duplicates exact evidence, and is capped at five.
    #[test]
    fn prop_evidence_shape(texts in corpus_strategy(), keywords in keywords_strategy()) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let docs = make_corpus(&refs);
        let config = SearchConfig::default().with_similarity_threshold(0.5);
        let run = search(&docs, &keywords, &config).unwrap();

        for scored in &run.results {
            for (keyword, record) in &scored.fuzzy_matches {
                prop_assert!(!scored.exact_matches.contains_key(keyword));
                prop_assert!(!record.candidates.is_empty() && record.candidates.len() <= 5);
                for pair in record.candidates.windows(2) {
                    prop_assert!(pair[0].similarity >= pair[1].similarity);
                }
            }
            for record in scored.exact_matches.values() {
                prop_assert_eq!(record.count, record.positions.len());
            }
        }
    }

    /// Every ranked score is reproduced by scoring its own evidence again.
    #[test]
    fn prop_score_is_function_of_evidence(
        texts in corpus_strategy(),
        keywords in keywords_strategy(),
    ) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let docs = make_corpus(&refs);
        let run = search(&docs, &keywords, &SearchConfig::default()).unwrap();

        for scored in &run.results {
            let again = relevance_score(&scored.exact_matches, &scored.fuzzy_matches, &keywords);
            prop_assert_eq!(again, scored.total_score);
        }
    }

    /// Truncation keeps a prefix of the full ranking.
    #[test]
    fn prop_top_n_is_prefix(
        texts in corpus_strategy(),
        keywords in keywords_strategy(),
        n in 1usize..5,
    ) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let docs = make_corpus(&refs);
        let full = search(&docs, &keywords, &SearchConfig::default()).unwrap();
        let cut = search(&docs, &keywords, &SearchConfig::default().with_top_n(Some(n))).unwrap();

        prop_assert_eq!(cut.results.len(), full.results.len().min(n));
        prop_assert_eq!(&full.results[..cut.results.len()], &cut.results[..]);
    }
}

#[test]
fn test_no_evidence_is_zero() {
    let score = relevance_score(&ExactMatches::new(), &FuzzyMatches::new(), &["rust", "go"]);
    assert_eq!(score, 0.0);
}
