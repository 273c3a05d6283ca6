// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Document, ExactMatches, FuzzyMatches, ScoredDocument};

/// Create a test document with a predictable id, label and reference.
pub fn make_doc(id: usize, text: &str) -> Document {
    Document::new(format!("cv-{}", id), text)
        .with_label(format!("Applicant {}", id))
        .with_reference(format!("data/cv-{}.txt", id))
}

/// Create a document whose text could not be extracted.
pub fn make_unreadable_doc(id: usize) -> Document {
    Document::unreadable(format!("cv-{}", id), format!("data/cv-{}.pdf", id))
}

/// Build a corpus from plain texts, ids assigned in order.
pub fn make_corpus(texts: &[&str]) -> Vec<Document> {
    texts
        .iter()
        .enumerate()
        .map(|(id, text)| make_doc(id, text))
        .collect()
}

/// A scored document with no evidence maps, for ranking tests.
pub fn make_scored(document: &Document, total_score: f64) -> ScoredDocument<'_> {
    ScoredDocument {
        document,
        exact_matches: ExactMatches::new(),
        fuzzy_matches: FuzzyMatches::new(),
        exact_score: 0,
        fuzzy_score: 0,
        total_score,
        preview: String::new(),
    }
}
