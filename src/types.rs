// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows through a search run.
//!
//! Documents come in, evidence and scores come out. Everything on the output
//! side borrows the input documents rather than copying their text, so a
//! `SearchRun` lives no longer than the corpus it ranked.
//!
//! # Invariants
//!
//! - **ExactMatchRecord**: `count == positions.len() ∧ count > 0`, positions ascending.
//!   A keyword with no occurrences has no record at all.
//!
//! - **FuzzyMatchRecord**: `1 ≤ candidates.len() ≤ 5`, sorted by descending similarity,
//!   and only for keywords without an exact record.
//!
//! - **ScoredDocument**: `total_score > 0` and is a pure function of the two match maps
//!   and the keyword list.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::exact::Algorithm;

/// One searchable document, as handed over by the text-extraction side.
///
/// `text` is `None` when extraction failed. Such documents are skipped, not
/// reported as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    /// Display name, typically the applicant's name.
    #[serde(default)]
    pub label: String,
    /// Where the text came from (file path). Display only.
    #[serde(default)]
    pub reference: String,
    #[serde(skip_serializing)]
    pub text: Option<String>,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            reference: String::new(),
            text: Some(text.into()),
            id,
        }
    }

    /// A document whose text could not be obtained.
    pub fn unreadable(id: impl Into<String>, reference: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            reference: reference.into(),
            text: None,
            id,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }
}

/// Where one keyword occurs exactly in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExactMatchRecord {
    pub count: usize,
    /// Character offsets into the case-folded document text, ascending.
    pub positions: Vec<usize>,
}

impl ExactMatchRecord {
    /// `None` for an empty position list, so callers never store a zero-count record.
    pub fn from_positions(positions: Vec<usize>) -> Option<Self> {
        if positions.is_empty() {
            None
        } else {
            Some(Self {
                count: positions.len(),
                positions,
            })
        }
    }
}

/// A document token that came close to a keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzyCandidate {
    pub word: String,
    pub similarity: f64,
    pub distance: usize,
}

/// The best fuzzy candidates for one keyword in one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FuzzyMatchRecord {
    pub candidates: Vec<FuzzyCandidate>,
}

impl FuzzyMatchRecord {
    /// The highest-similarity candidate.
    pub fn best(&self) -> Option<&FuzzyCandidate> {
        self.candidates.first()
    }

    pub fn best_similarity(&self) -> Option<f64> {
        self.best().map(|c| c.similarity)
    }
}

/// Exact evidence keyed by normalized keyword.
pub type ExactMatches = BTreeMap<String, ExactMatchRecord>;

/// Fuzzy evidence keyed by normalized keyword.
pub type FuzzyMatches = BTreeMap<String, FuzzyMatchRecord>;

/// A document that earned a positive score, with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDocument<'a> {
    pub document: &'a Document,
    pub exact_matches: ExactMatches,
    pub fuzzy_matches: FuzzyMatches,
    /// Total exact occurrences across all keywords.
    pub exact_score: usize,
    /// Number of keywords with fuzzy evidence.
    pub fuzzy_score: usize,
    pub total_score: f64,
    /// Leading slice of the document text for display.
    pub preview: String,
}

/// Timing and volume counters for one search run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchTiming {
    pub exact_phase: Duration,
    pub fuzzy_phase: Duration,
    /// Every document supplied, including those skipped for missing text.
    pub documents_scanned: usize,
    pub documents_skipped: usize,
    pub algorithm: Algorithm,
    pub results_returned: usize,
}

impl SearchTiming {
    pub fn exact_phase_seconds(&self) -> f64 {
        self.exact_phase.as_secs_f64()
    }

    pub fn fuzzy_phase_seconds(&self) -> f64 {
        self.fuzzy_phase.as_secs_f64()
    }

    /// Fold another partial timing into this one. Durations and counts add up.
    pub fn absorb(&mut self, other: &SearchTiming) {
        self.exact_phase += other.exact_phase;
        self.fuzzy_phase += other.fuzzy_phase;
        self.documents_scanned += other.documents_scanned;
        self.documents_skipped += other.documents_skipped;
    }
}

/// Wire form of [`SearchTiming`]: seconds as floats, algorithm by name.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchTimingSummary {
    exact_phase_seconds: f64,
    fuzzy_phase_seconds: f64,
    documents_scanned: usize,
    documents_skipped: usize,
    algorithm_used: &'static str,
    results_returned: usize,
}

impl Serialize for SearchTiming {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SearchTimingSummary {
            exact_phase_seconds: self.exact_phase_seconds(),
            fuzzy_phase_seconds: self.fuzzy_phase_seconds(),
            documents_scanned: self.documents_scanned,
            documents_skipped: self.documents_skipped,
            algorithm_used: self.algorithm.name(),
            results_returned: self.results_returned,
        }
        .serialize(serializer)
    }
}

/// The ranked output of one search call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRun<'a> {
    pub results: Vec<ScoredDocument<'a>>,
    pub timing: SearchTiming,
}
