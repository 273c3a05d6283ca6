// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-level fuzzy matching.
//!
//! Each keyword is compared against every whitespace token of the document,
//! repeats included. Tokens at or above the similarity threshold are kept, best first,
//! and cut to [`FUZZY_TOP_K`]. The cost is keywords × tokens × token length²,
//! which is fine for one CV and a handful of keywords; there is no index.
//!
//! Input text is expected to be case-folded already. Punctuation is left alone:
//! "python," and "python" are different tokens.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::types::{FuzzyCandidate, FuzzyMatchRecord, FuzzyMatches};

use super::levenshtein::{levenshtein_bounded, max_distance_for, similarity_from_distance};

/// Minimum similarity a token needs to count as a fuzzy match, unless configured.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Candidates kept per keyword.
pub const FUZZY_TOP_K: usize = 5;

/// Whitespace-separated tokens in text order.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Edit-distance matcher with a fixed similarity threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl FuzzyMatcher {
    /// Matcher for a threshold in `(0, 1]`; anything else, NaN included, is
    /// [`Error::InvalidThreshold`].
    pub fn new(threshold: f64) -> Result<Self> {
        if threshold > 0.0 && threshold <= 1.0 {
            Ok(Self { threshold })
        } else {
            Err(Error::InvalidThreshold(threshold))
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Fuzzy evidence for each keyword in `keywords` against `text`.
    ///
    /// Keywords with no token over the threshold are absent from the map.
    pub fn match_keywords<'k, I>(&self, text: &str, keywords: I) -> FuzzyMatches
    where
        I: IntoIterator<Item = &'k str>,
    {
        let tokens = tokenize(text);
        let mut matches = FuzzyMatches::new();

        for keyword in keywords {
            if matches.contains_key(keyword) {
                continue;
            }
            if let Some(record) = self.match_tokens(keyword, &tokens) {
                matches.insert(keyword.to_string(), record);
            }
        }

        matches
    }

    /// Best candidates for one keyword among pre-split `tokens`.
    pub fn match_tokens(&self, keyword: &str, tokens: &[&str]) -> Option<FuzzyMatchRecord> {
        let keyword_len = keyword.chars().count();
        let mut candidates = Vec::new();

        for &token in tokens {
            let token_len = token.chars().count();
            let max_len = keyword_len.max(token_len);
            let limit = max_distance_for(self.threshold, max_len);

            let Some(distance) = levenshtein_bounded(keyword, token, limit) else {
                continue;
            };
            let similarity = similarity_from_distance(distance, keyword_len, token_len);
            if similarity >= self.threshold {
                candidates.push(FuzzyCandidate {
                    word: token.to_string(),
                    similarity,
                    distance,
                });
            }
        }

        if candidates.is_empty() {
            return None;
        }

        // Stable: equal similarities keep text order
        candidates.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        candidates.truncate(FUZZY_TOP_K);

        Some(FuzzyMatchRecord { candidates })
    }
}
