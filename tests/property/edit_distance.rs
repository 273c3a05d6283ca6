// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance: oracle agreement, metric laws, similarity bounds.

use super::oracles::oracle_levenshtein;
use cvrank::fuzzy::{levenshtein_bounded, levenshtein_distance, similarity};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eé]{0,10}").unwrap()
}

fn non_empty_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eé]{1,10}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn diff_levenshtein(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), oracle_levenshtein(&a, &b));
    }

    #[test]
    fn prop_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
    }

    #[test]
    fn prop_identity(a in word_strategy()) {
        prop_assert_eq!(levenshtein_distance(&a, &a), 0);
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn prop_triangle_inequality(
        a in word_strategy(),
        b in word_strategy(),
        c in word_strategy(),
    ) {
        let ab = levenshtein_distance(&a, &b);
        let bc = levenshtein_distance(&b, &c);
        let ac = levenshtein_distance(&a, &c);
        prop_assert!(ac <= ab + bc);
    }

    /// The bounded variant is the full distance, filtered by the limit.
    #[test]
    fn prop_bounded_consistent(a in word_strategy(), b in word_strategy(), max in 0usize..6) {
        let full = levenshtein_distance(&a, &b);
        let expected = (full <= max).then_some(full);
        prop_assert_eq!(levenshtein_bounded(&a, &b, max), expected);
    }

    #[test]
    fn prop_similarity_in_unit_interval(a in non_empty_word(), b in non_empty_word()) {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "similarity {} out of range", s);
    }
}
