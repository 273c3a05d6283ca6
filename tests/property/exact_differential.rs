// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential testing: both exact-match algorithms against the naive scan.

use super::oracles::oracle_find_all;
use cvrank::{Algorithm, PatternSearch};
use proptest::prelude::*;

/// Small alphabets make matches (and overlaps) common.
fn text_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abc".to_vec()), 0..64)
}

fn pattern_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abc".to_vec()), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Both algorithms report exactly the oracle's offsets.
    #[test]
    fn diff_find_all(text in text_strategy(), pattern in pattern_strategy()) {
        let expected = oracle_find_all(&text, &pattern);
        for algorithm in Algorithm::all() {
            let compiled = algorithm.compile(&pattern);
            prop_assert_eq!(
                compiled.find_all(&text),
                expected.clone(),
                "{} disagrees with oracle",
                algorithm
            );
        }
    }

    /// `find_first` is the head of `find_all`.
    #[test]
    fn diff_find_first(text in text_strategy(), pattern in pattern_strategy()) {
        let expected = oracle_find_all(&text, &pattern).first().copied();
        for algorithm in Algorithm::all() {
            prop_assert_eq!(algorithm.compile(&pattern).find_first(&text), expected);
        }
    }

    /// Every reported offset really starts an occurrence.
    #[test]
    fn prop_offsets_are_occurrences(
        text in "[a-z ]{0,80}",
        pattern in "[a-z]{1,4}",
    ) {
        for algorithm in Algorithm::all() {
            for offset in cvrank::find_all(algorithm, &text, &pattern) {
                prop_assert_eq!(&text[offset..offset + pattern.len()], pattern.as_str());
            }
        }
    }

    /// Arbitrary bytes, including ones that never occur in the pattern.
    #[test]
    fn diff_arbitrary_bytes(
        text in prop::collection::vec(any::<u8>(), 0..128),
        pattern in prop::collection::vec(any::<u8>(), 1..4),
    ) {
        let expected = oracle_find_all(&text, &pattern);
        for algorithm in Algorithm::all() {
            prop_assert_eq!(algorithm.compile(&pattern).find_all(&text), expected.clone());
        }
    }
}

#[test]
fn test_fixed_cases_both_algorithms() {
    for algorithm in Algorithm::all() {
        assert_eq!(cvrank::find_all(algorithm, "aaaa", "aa"), vec![0, 1, 2]);
        assert_eq!(cvrank::find_all(algorithm, "anything", ""), vec![0]);
        assert_eq!(cvrank::find_first(algorithm, "anything", ""), Some(0));
        assert_eq!(cvrank::find_first(algorithm, "abcdef", "xyz"), None);
        assert_eq!(cvrank::find_first(algorithm, "ab", "abc"), None);
    }
}
