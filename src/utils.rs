// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for keyword and text handling.

/// Case-fold document text for matching.
///
/// Offsets reported by a search are character offsets into this folded string.
pub fn fold_text(text: &str) -> String {
    text.to_lowercase()
}

/// Map ascending byte offsets in `text` to character offsets.
///
/// Offsets must fall on char boundaries, as matches of a UTF-8 pattern do.
pub fn char_offsets(text: &str, byte_offsets: &[usize]) -> Vec<usize> {
    let mut boundaries = text.char_indices().map(|(byte, _)| byte).enumerate();
    let mut chars_seen = 0;
    let mut last_byte = 0;

    byte_offsets
        .iter()
        .map(|&offset| {
            while last_byte < offset {
                match boundaries.next() {
                    Some((index, byte)) => {
                        chars_seen = index;
                        last_byte = byte;
                    }
                    None => {
                        chars_seen = text.chars().count();
                        last_byte = text.len();
                        break;
                    }
                }
            }
            chars_seen
        })
        .collect()
}

/// Trim and case-fold one keyword. Returns `None` if nothing is left.
pub fn normalize_keyword(keyword: &str) -> Option<String> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalize a keyword list, dropping blanks and keeping order and duplicates.
pub fn normalize_keywords<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    keywords
        .iter()
        .filter_map(|k| normalize_keyword(k.as_ref()))
        .collect()
}

/// Split user input like `"Python, React ,, SQL"` into keywords.
///
/// Commas separate keywords; surrounding whitespace and empty entries are
/// dropped. Case is left alone here and folded later with the rest.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// The first `max_chars` characters of `text`, with `...` appended if cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
