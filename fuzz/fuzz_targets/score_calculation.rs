// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, positive for every ranked document, sorted, and
//! deterministic. Running the same search twice must give identical results.

#![no_main]

use arbitrary::Arbitrary;
use cvrank::{search, Algorithm, Document, SearchConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ScoreInput {
    texts: Vec<String>,
    keywords: Vec<String>,
    boyer_moore: bool,
    top_n: Option<u8>,
}

fuzz_target!(|input: ScoreInput| {
    let docs: Vec<Document> = input
        .texts
        .iter()
        .take(16)
        .enumerate()
        .map(|(i, text)| Document::new(i.to_string(), text.chars().take(1024).collect::<String>()))
        .collect();
    let keywords: Vec<String> = input
        .keywords
        .iter()
        .take(8)
        .map(|k| k.chars().take(24).collect())
        .collect();

    let algorithm = if input.boyer_moore {
        Algorithm::SkipTable
    } else {
        Algorithm::PrefixTable
    };
    let config = SearchConfig::default()
        .with_algorithm(algorithm)
        .with_top_n(input.top_n.map(usize::from));

    // Only blank keyword lists are rejected
    let Ok(first) = search(&docs, &keywords, &config) else {
        return;
    };
    let second = search(&docs, &keywords, &config).expect("second run failed after first succeeded");

    assert_eq!(first.results, second.results, "search is not deterministic");

    for scored in &first.results {
        assert!(scored.total_score.is_finite(), "non-finite score");
        assert!(scored.total_score > 0.0, "zero score was ranked");
    }
    for pair in first.results.windows(2) {
        assert!(pair[0].total_score >= pair[1].total_score, "results not sorted");
    }
    assert_eq!(first.timing.documents_scanned, docs.len());
});
