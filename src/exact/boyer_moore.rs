// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boyer-Moore search with the bad-character rule.
//!
//! The window is compared right-to-left. On a mismatch the text byte that
//! failed decides how far to jump: line it up with its last occurrence in the
//! pattern, or skip past it entirely if the pattern never contains it. No good
//! suffix table; for short keywords over prose the bad-character rule does
//! nearly all the work.

use std::ops::ControlFlow;

use super::PatternSearch;

/// Marks a byte that never occurs in the pattern.
const ABSENT: isize = -1;

/// A pattern with its 256-entry last-occurrence table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadCharPattern {
    pattern: Vec<u8>,
    last: [isize; 256],
}

impl BadCharPattern {
    pub fn new(pattern: &[u8]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            last: bad_char_table(pattern),
        }
    }

    /// Last index of `byte` in the pattern, or `None` if it never occurs.
    pub fn last_occurrence(&self, byte: u8) -> Option<usize> {
        usize::try_from(self.last[byte as usize]).ok()
    }

    fn scan(&self, text: &[u8], mut on_match: impl FnMut(usize) -> ControlFlow<()>) {
        let pattern = &self.pattern;
        let m = pattern.len();
        let n = text.len();
        let mut s = 0usize;

        while s + m <= n {
            let window = &text[s..s + m];
            let mismatch = (0..m).rev().find(|&j| pattern[j] != window[j]);

            let shift = match mismatch {
                None => {
                    if on_match(s).is_break() {
                        return;
                    }
                    // Align on the byte just past the window; at the end of the
                    // text there is nothing to look at, so creep forward by one.
                    if s + m < n {
                        m as isize - self.last[text[s + m] as usize]
                    } else {
                        1
                    }
                }
                Some(j) => j as isize - self.last[text[s + j] as usize],
            };

            s += shift.max(1) as usize;
        }
    }
}

impl PatternSearch for BadCharPattern {
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

/// Map every byte value to the last index where it occurs in `pattern`.
pub(crate) fn bad_char_table(pattern: &[u8]) -> [isize; 256] {
    let mut last = [ABSENT; 256];
    for (i, &byte) in pattern.iter().enumerate() {
        last[byte as usize] = i as isize;
    }
    last
}
