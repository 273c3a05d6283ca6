// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind document relevance.
//!
//! Three signals, weighted and summed:
//!
//! ```text
//! exact    = Σ_k min(count_k × 2.0, 5.0)              (keywords with exact hits)
//! fuzzy    = Σ_k best_similarity_k × 1.5               (only when best_similarity > 0.6)
//! coverage = |found keywords| / |keywords| × 3.0
//!
//! total    = exact × 1.0 + fuzzy × 0.7 + coverage × 0.5,  rounded to 2 decimals
//! ```
//!
//! # Constants
//!
//! | Constant             | Value | Role                                            |
//! |----------------------|-------|-------------------------------------------------|
//! | `EXACT_HIT_POINTS`   | 2.0   | Per occurrence, so repeats matter a little      |
//! | `EXACT_KEYWORD_CAP`  | 5.0   | Third occurrence onward adds nothing            |
//! | `FUZZY_HIT_POINTS`   | 1.5   | Scaled by similarity, below any exact hit       |
//! | `FUZZY_FLOOR`        | 0.6   | Weaker fuzzy evidence is ignored outright       |
//! | `COVERAGE_POINTS`    | 3.0   | Full coverage bonus before weighting            |
//!
//! The score is a pure function of the two evidence maps and the keyword list.

use std::collections::BTreeSet;

use crate::types::{ExactMatches, FuzzyMatches};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Points per exact occurrence of a keyword.
pub const EXACT_HIT_POINTS: f64 = 2.0;

/// Most points a single keyword can earn from exact occurrences.
pub const EXACT_KEYWORD_CAP: f64 = 5.0;

/// Points for a perfect fuzzy hit, scaled down by similarity.
pub const FUZZY_HIT_POINTS: f64 = 1.5;

/// Fuzzy hits at or below this similarity contribute nothing.
pub const FUZZY_FLOOR: f64 = 0.6;

/// Coverage bonus for finding every keyword.
pub const COVERAGE_POINTS: f64 = 3.0;

pub const EXACT_WEIGHT: f64 = 1.0;
pub const FUZZY_WEIGHT: f64 = 0.7;
pub const COVERAGE_WEIGHT: f64 = 0.5;

/// The pieces of a document's score, before and after weighting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    pub exact: f64,
    pub fuzzy: f64,
    /// Fraction of keywords found by either mode, in `[0, 1]`.
    pub coverage: f64,
    pub total: f64,
}

/// Points one keyword earns from `count` exact occurrences.
pub fn exact_keyword_points(count: usize) -> f64 {
    (count as f64 * EXACT_HIT_POINTS).min(EXACT_KEYWORD_CAP)
}

/// Points one keyword earns from its best fuzzy similarity.
pub fn fuzzy_keyword_points(best_similarity: f64) -> f64 {
    if best_similarity > FUZZY_FLOOR {
        best_similarity * FUZZY_HIT_POINTS
    } else {
        0.0
    }
}

/// Round half away from zero to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score every component for one document.
///
/// `keywords` is the normalized request in order; a keyword listed twice is
/// counted twice in the exact and fuzzy sums and in the coverage denominator.
pub fn score_breakdown<S: AsRef<str>>(
    exact: &ExactMatches,
    fuzzy: &FuzzyMatches,
    keywords: &[S],
) -> ScoreBreakdown {
    let mut exact_score = 0.0;
    let mut fuzzy_score = 0.0;
    let mut found = BTreeSet::new();

    for keyword in keywords {
        let keyword = keyword.as_ref();

        if let Some(record) = exact.get(keyword) {
            exact_score += exact_keyword_points(record.count);
            found.insert(keyword);
        }

        if let Some(best) = fuzzy.get(keyword).and_then(|r| r.best_similarity()) {
            fuzzy_score += fuzzy_keyword_points(best);
            found.insert(keyword);
        }
    }

    let coverage = if keywords.is_empty() {
        0.0
    } else {
        found.len() as f64 / keywords.len() as f64
    };
    let coverage_bonus = coverage * COVERAGE_POINTS;

    let total = exact_score * EXACT_WEIGHT
        + fuzzy_score * FUZZY_WEIGHT
        + coverage_bonus * COVERAGE_WEIGHT;

    ScoreBreakdown {
        exact: exact_score,
        fuzzy: fuzzy_score,
        coverage,
        total: round_to_cents(total),
    }
}

/// Final relevance score for one document. Zero means "no evidence".
pub fn relevance_score<S: AsRef<str>>(
    exact: &ExactMatches,
    fuzzy: &FuzzyMatches,
    keywords: &[S],
) -> f64 {
    score_breakdown(exact, fuzzy, keywords).total
}
