// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for exact substring search.
//!
//! Both algorithms must return the same offsets on every input, every offset
//! must be a real occurrence, and `find_first` must be the first of them.

#![no_main]

use arbitrary::Arbitrary;
use cvrank::{Algorithm, PatternSearch};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    text: Vec<u8>,
    pattern: Vec<u8>,
}

fuzz_target!(|input: SearchInput| {
    let text = &input.text[..input.text.len().min(4096)];
    let pattern = &input.pattern[..input.pattern.len().min(64)];

    let prefix = Algorithm::PrefixTable.compile(pattern);
    let skip = Algorithm::SkipTable.compile(pattern);

    let from_prefix = prefix.find_all(text);
    let from_skip = skip.find_all(text);
    assert_eq!(from_prefix, from_skip, "algorithms disagree");

    for &offset in &from_prefix {
        assert_eq!(&text[offset..offset + pattern.len()], pattern);
    }
    for pair in from_prefix.windows(2) {
        assert!(pair[0] < pair[1], "offsets not ascending");
    }

    assert_eq!(prefix.find_first(text), from_prefix.first().copied());
    assert_eq!(skip.find_first(text), from_prefix.first().copied());
});
