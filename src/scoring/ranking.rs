// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored documents get sorted and cut.
//!
//! Higher total wins. Equal totals keep the order the documents were supplied
//! in, so ranking the same corpus twice always gives the same list. That is why
//! the sort below is `sort_by` (stable) and never `sort_unstable_by`.

use std::cmp::Ordering;

use crate::types::ScoredDocument;

/// Compare two scored documents for ranking: descending total score.
///
/// NaN never occurs (scores are finite sums of finite terms); it would compare
/// equal here rather than poison the sort.
pub fn compare_scored(a: &ScoredDocument<'_>, b: &ScoredDocument<'_>) -> Ordering {
    b.total_score
        .partial_cmp(&a.total_score)
        .unwrap_or(Ordering::Equal)
}

/// Sort `results` best-first and keep the first `top_n`.
///
/// `None` or `Some(0)` keeps everything.
pub fn rank(results: &mut Vec<ScoredDocument<'_>>, top_n: Option<usize>) {
    results.sort_by(compare_scored);
    if let Some(n) = top_n.filter(|&n| n > 0) {
        results.truncate(n);
    }
}
