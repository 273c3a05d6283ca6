// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knuth-Morris-Pratt search over bytes.
//!
//! The failure table records, for every pattern prefix, how much of it is
//! already matched when a mismatch forces the pattern to slide. The text cursor
//! only ever moves forward, so a scan is O(n + m) no matter how repetitive the
//! input is.

use std::ops::ControlFlow;

use super::PatternSearch;

/// A pattern with its failure table.
///
/// `table[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTablePattern {
    pattern: Vec<u8>,
    table: Vec<usize>,
}

impl PrefixTablePattern {
    pub fn new(pattern: &[u8]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            table: prefix_table(pattern),
        }
    }

    /// The failure table (exposed for tests and inspection).
    pub fn table(&self) -> &[usize] {
        &self.table
    }

    /// Walk text and pattern in lockstep, calling `on_match` with each start offset.
    ///
    /// After a full match the pattern cursor falls back to `table[m - 1]` instead of
    /// zero, which is what surfaces overlapping occurrences.
    fn scan(&self, text: &[u8], mut on_match: impl FnMut(usize) -> ControlFlow<()>) {
        let pattern = &self.pattern;
        let m = pattern.len();
        let mut matched = 0usize;

        for (i, &byte) in text.iter().enumerate() {
            while matched > 0 && byte != pattern[matched] {
                matched = self.table[matched - 1];
            }
            if byte == pattern[matched] {
                matched += 1;
            }
            if matched == m {
                if on_match(i + 1 - m).is_break() {
                    return;
                }
                matched = self.table[m - 1];
            }
        }
    }
}

impl PatternSearch for PrefixTablePattern {
    fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    fn find_first(&self, text: &[u8]) -> Option<usize> {
        if self.pattern.is_empty() {
            return Some(0);
        }
        if self.pattern.len() > text.len() {
            return None;
        }

        let mut first = None;
        self.scan(text, |offset| {
            first = Some(offset);
            ControlFlow::Break(())
        });
        first
    }

    fn find_all(&self, text: &[u8]) -> Vec<usize> {
        if self.pattern.is_empty() {
            return vec![0];
        }
        if self.pattern.len() > text.len() {
            return Vec::new();
        }

        let mut positions = Vec::new();
        self.scan(text, |offset| {
            positions.push(offset);
            ControlFlow::Continue(())
        });
        positions
    }
}

/// Build the longest-proper-prefix-suffix table for `pattern`.
pub(crate) fn prefix_table(pattern: &[u8]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut len = 0usize;
    let mut i = 1usize;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            table[i] = len;
            i += 1;
        } else if len != 0 {
            len = table[len - 1];
        } else {
            table[i] = 0;
            i += 1;
        }
    }

    table
}
