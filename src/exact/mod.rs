// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact substring search: two interchangeable algorithms behind one trait.
//!
//! Both algorithms answer the same two questions over raw bytes, "where is the
//! first occurrence?" and "where are all of them?", and must agree on every
//! input. They differ only in how they skip:
//!
//! | Variant        | Table                        | Skip rule                          |
//! |----------------|------------------------------|------------------------------------|
//! | `PrefixTable`  | failure function (KMP)       | never re-reads a text byte         |
//! | `SkipTable`    | bad-character (Boyer-Moore)  | jumps on the mismatching text byte |
//!
//! # Edge-case policy
//!
//! - Empty pattern matches at offset 0 (`find_first` → `Some(0)`, `find_all` → `[0]`).
//! - Pattern longer than text never matches, and the text is not scanned.
//! - Overlapping matches are reported: `find_all(b"aaaa", b"aa")` is `[0, 1, 2]`.
//! - "Not found" is `None`, never a magic offset.
//!
//! Case folding is the caller's job; comparison is plain byte equality.

mod boyer_moore;
mod kmp;

pub use boyer_moore::BadCharPattern;
pub use kmp::PrefixTablePattern;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A preprocessed pattern that can be searched for in any number of texts.
///
/// Building the table is the expensive part, so the orchestrator compiles each
/// keyword once per run and reuses it for every document.
pub trait PatternSearch {
    /// The pattern bytes this searcher was built from.
    fn pattern(&self) -> &[u8];

    /// Lowest start offset of the pattern in `text`, or `None`.
    fn find_first(&self, text: &[u8]) -> Option<usize>;

    /// Every start offset of the pattern in `text`, ascending, overlaps included.
    fn find_all(&self, text: &[u8]) -> Vec<usize>;
}

/// Which exact-match algorithm a search run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Knuth-Morris-Pratt: failure-function prefix table, linear time.
    #[default]
    #[serde(alias = "kmp")]
    PrefixTable,
    /// Boyer-Moore with the bad-character rule only.
    #[serde(alias = "boyer-moore", alias = "bm")]
    SkipTable,
}

impl Algorithm {
    /// Short display name, as shown in timing summaries.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::PrefixTable => "KMP",
            Algorithm::SkipTable => "BM",
        }
    }

    /// Preprocess `pattern` for this algorithm.
    pub fn compile(self, pattern: &[u8]) -> CompiledPattern {
        match self {
            Algorithm::PrefixTable => CompiledPattern::PrefixTable(PrefixTablePattern::new(pattern)),
            Algorithm::SkipTable => CompiledPattern::SkipTable(BadCharPattern::new(pattern)),
        }
    }

    /// Every algorithm, in a stable order. Used by the `compare` command and tests.
    pub fn all() -> [Algorithm; 2] {
        [Algorithm::PrefixTable, Algorithm::SkipTable]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kmp" | "prefix-table" | "knuth-morris-pratt" => Ok(Algorithm::PrefixTable),
            "bm" | "boyer-moore" | "skip-table" => Ok(Algorithm::SkipTable),
            other => Err(format!(
                "unknown algorithm '{}' (expected 'kmp' or 'boyer-moore')",
                other
            )),
        }
    }
}

/// A pattern compiled for one of the two algorithms.
///
/// Static dispatch over the variants; the algorithm is chosen by configuration,
/// so there is no need for a trait object.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    PrefixTable(PrefixTablePattern),
    SkipTable(BadCharPattern),
}

impl PatternSearch for CompiledPattern {
    fn pattern(&self) -> &[u8] {
        match self {
            CompiledPattern::PrefixTable(p) => p.pattern(),
            CompiledPattern::SkipTable(p) => p.pattern(),
        }
    }

    fn find_first(&self, text: &[u8]) -> Option<usize> {
        match self {
            CompiledPattern::PrefixTable(p) => p.find_first(text),
            CompiledPattern::SkipTable(p) => p.find_first(text),
        }
    }

    fn find_all(&self, text: &[u8]) -> Vec<usize> {
        match self {
            CompiledPattern::PrefixTable(p) => p.find_all(text),
            CompiledPattern::SkipTable(p) => p.find_all(text),
        }
    }
}

/// One-shot first-occurrence search. Compiles the pattern and discards it.
pub fn find_first(algorithm: Algorithm, text: &str, pattern: &str) -> Option<usize> {
    algorithm.compile(pattern.as_bytes()).find_first(text.as_bytes())
}

/// One-shot all-occurrences search. Compiles the pattern and discards it.
pub fn find_all(algorithm: Algorithm, text: &str, pattern: &str) -> Vec<usize> {
    algorithm.compile(pattern.as_bytes()).find_all(text.as_bytes())
}
