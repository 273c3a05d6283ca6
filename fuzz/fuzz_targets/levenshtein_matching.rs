// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and the fuzzy matcher.
//!
//! The bounded distance must agree with the full one under its limit, and the
//! matcher must only ever report candidates that clear its threshold.

#![no_main]

use arbitrary::Arbitrary;
use cvrank::fuzzy::{levenshtein_bounded, levenshtein_distance, similarity, FuzzyMatcher};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    keyword: String,
    text: String,
    limit: u8,
    threshold_percent: u8,
}

fuzz_target!(|input: MatchInput| {
    let keyword: String = input.keyword.chars().take(32).collect();
    let text: String = input.text.chars().take(512).collect();
    if keyword.is_empty() {
        return;
    }

    for token in text.split_whitespace() {
        let full = levenshtein_distance(&keyword, token);
        assert_eq!(full, levenshtein_distance(token, &keyword), "distance not symmetric");

        let limit = usize::from(input.limit % 16);
        assert_eq!(levenshtein_bounded(&keyword, token, limit), (full <= limit).then_some(full));

        let s = similarity(&keyword, token);
        assert!((0.0..=1.0).contains(&s), "similarity {} out of range", s);
    }

    let threshold = f64::from(input.threshold_percent % 100 + 1) / 100.0;
    let matcher = FuzzyMatcher::new(threshold).expect("threshold in (0, 1]");
    let matches = matcher.match_keywords(&text, [keyword.as_str()]);
    if let Some(record) = matches.get(&keyword) {
        assert!(!record.candidates.is_empty() && record.candidates.len() <= 5);
        for candidate in &record.candidates {
            assert!(candidate.similarity >= threshold);
        }
    }
});
