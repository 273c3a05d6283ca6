// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Two layers here: plain Levenshtein distance and similarity for one-off
//! comparisons, and a word-level matcher that runs it across a document's
//! whitespace tokens for the keywords exact search missed.

mod levenshtein;
mod matcher;

pub use levenshtein::*;
pub use matcher::{tokenize, FuzzyMatcher, DEFAULT_SIMILARITY_THRESHOLD, FUZZY_TOP_K};
