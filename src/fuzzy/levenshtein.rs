// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the similarity derived from it.
//!
//! Distances count Unicode scalar values, not bytes, so "café" vs "cafe" is one
//! substitution. Similarity normalizes by the longer token:
//!
//! ```text
//! similarity(a, b) = 1 - distance(a, b) / max(len(a), len(b))     (1.0 if both empty)
//! ```
//!
//! `levenshtein_bounded` adds the usual early exits for the fuzzy matcher's hot
//! loop: the length difference is a lower bound on the distance, and once every
//! cell in a DP row exceeds the limit the rest of the table cannot come back
//! under it.

/// Minimum number of single-character insertions, deletions and substitutions
/// turning `a` into `b`.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// The distance between `a` and `b` if it is at most `max`, otherwise `None`.
///
/// Same table as [`levenshtein_distance`], abandoned as soon as the answer is
/// known to exceed `max`.
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    let distance = dp[b_len];
    (distance <= max).then_some(distance)
}

/// Similarity in `[0, 1]` for a known distance between tokens of the given
/// character lengths.
pub fn similarity_from_distance(distance: usize, a_len: usize, b_len: usize) -> f64 {
    let max_len = a_len.max(b_len);
    if max_len == 0 {
        return 1.0;
    }
    1.0 - distance as f64 / max_len as f64
}

/// `1 - distance / max(len)`; identical tokens score 1.0, disjoint ones 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_from_distance(
        levenshtein_distance(a, b),
        a.chars().count(),
        b.chars().count(),
    )
}

/// Largest distance that can still reach `threshold` for tokens whose longer
/// side is `max_len` characters.
///
/// Rounded up so floating point never prunes a token the exact similarity
/// check would keep; the caller re-checks the similarity anyway.
pub fn max_distance_for(threshold: f64, max_len: usize) -> usize {
    ((1.0 - threshold).max(0.0) * max_len as f64).ceil() as usize
}
