// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The worked example end to end, for each exact-match algorithm.

use super::common::{make_doc, SCENARIO_KEYWORDS, SCENARIO_TEXT};
use cvrank::{search, Algorithm, SearchConfig};

fn run_scenario(algorithm: Algorithm) {
    let docs = vec![make_doc(1, SCENARIO_TEXT)];
    let config = SearchConfig::default()
        .with_algorithm(algorithm)
        .with_similarity_threshold(0.8);

    let run = search(&docs, &SCENARIO_KEYWORDS, &config).unwrap();
    assert_eq!(run.results.len(), 1);

    let scored = &run.results[0];
    for keyword in ["python", "react", "sql"] {
        let record = &scored.exact_matches[keyword];
        assert_eq!(record.count, 1, "{} should occur once", keyword);
        assert!(!scored.fuzzy_matches.contains_key(keyword));
    }
    assert!(!scored.exact_matches.contains_key("golang"));
    assert!(!scored.fuzzy_matches.contains_key("golang"));
    assert_eq!(scored.total_score, 7.13);

    assert_eq!(run.timing.algorithm, algorithm);
    assert_eq!(run.timing.documents_scanned, 1);
    assert_eq!(run.timing.results_returned, 1);
}

#[test]
fn test_scenario_skip_table() {
    run_scenario(Algorithm::SkipTable);
}

#[test]
fn test_scenario_prefix_table() {
    run_scenario(Algorithm::PrefixTable);
}

#[test]
fn test_scenario_offsets_point_at_keywords() {
    let docs = vec![make_doc(1, SCENARIO_TEXT)];
    let run = search(&docs, &SCENARIO_KEYWORDS, &SearchConfig::default()).unwrap();
    let scored = &run.results[0];

    for (keyword, record) in &scored.exact_matches {
        for &offset in &record.positions {
            assert_eq!(&SCENARIO_TEXT[offset..offset + keyword.len()], keyword);
        }
    }
}

#[test]
fn test_scenario_serializes_camel_case() {
    let docs = vec![make_doc(1, SCENARIO_TEXT)];
    let run = search(&docs, &SCENARIO_KEYWORDS, &SearchConfig::default()).unwrap();
    let json = serde_json::to_value(&run).unwrap();

    let first = &json["results"][0];
    assert_eq!(first["totalScore"], 7.13);
    assert_eq!(first["exactMatches"]["sql"]["count"], 1);
    assert_eq!(first["document"]["id"], "cv-1");
    assert!(first["document"].get("text").is_none());
    assert_eq!(json["timing"]["algorithmUsed"], "KMP");
    assert_eq!(json["timing"]["documentsScanned"], 1);
}
