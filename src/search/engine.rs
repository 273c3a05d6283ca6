// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequential search driver and the per-document step shared with the
//! parallel path.

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::exact::PatternSearch;
use crate::fuzzy::FuzzyMatcher;
use crate::scoring::ranking::rank;
use crate::scoring::relevance_score;
use crate::types::{
    Document, ExactMatchRecord, ExactMatches, ScoredDocument, SearchRun, SearchTiming,
};
use crate::utils::{char_offsets, fold_text, preview};

use super::query::PreparedQuery;

/// Runs searches under one validated configuration.
#[derive(Debug, Clone, Copy)]
pub struct Searcher {
    config: SearchConfig,
    fuzzy: FuzzyMatcher,
}

/// What one document contributed: maybe a result, always some timing.
pub(crate) struct DocumentOutcome<'a> {
    pub scored: Option<ScoredDocument<'a>>,
    pub timing: SearchTiming,
}

impl Searcher {
    /// Fails with [`Error::InvalidThreshold`](crate::Error::InvalidThreshold)
    /// for a threshold outside `(0, 1]`.
    pub fn new(config: SearchConfig) -> Result<Self> {
        Ok(Self {
            fuzzy: FuzzyMatcher::new(config.similarity_threshold)?,
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Score and rank every document, one at a time, in source order.
    pub fn search<'a, S: AsRef<str>>(
        &self,
        documents: &'a [Document],
        keywords: &[S],
    ) -> Result<SearchRun<'a>> {
        let query = PreparedQuery::new(keywords, self.config.algorithm)?;
        Ok(self.search_prepared(documents, &query))
    }

    /// Like [`search`](Self::search), with keywords already compiled.
    pub fn search_prepared<'a>(
        &self,
        documents: &'a [Document],
        query: &PreparedQuery,
    ) -> SearchRun<'a> {
        let mut results = Vec::new();
        let mut timing = self.empty_timing();

        for document in documents {
            let outcome = self.score_document(query, document);
            timing.absorb(&outcome.timing);
            results.extend(outcome.scored);
        }

        self.finish(results, timing)
    }

    pub(crate) fn empty_timing(&self) -> SearchTiming {
        SearchTiming {
            algorithm: self.config.algorithm,
            ..SearchTiming::default()
        }
    }

    /// Exact phase, fuzzy phase and score for a single document.
    pub(crate) fn score_document<'a>(
        &self,
        query: &PreparedQuery,
        document: &'a Document,
    ) -> DocumentOutcome<'a> {
        let mut timing = SearchTiming {
            documents_scanned: 1,
            ..self.empty_timing()
        };

        let Some(text) = document.text.as_deref() else {
            debug!(id = %document.id, "no text, skipping");
            timing.documents_skipped = 1;
            return DocumentOutcome {
                scored: None,
                timing,
            };
        };

        let folded = fold_text(text);
        let haystack = folded.as_bytes();

        let started = Instant::now();
        let mut exact_matches = ExactMatches::new();
        for (keyword, pattern) in query.patterns() {
            let byte_offsets = pattern.find_all(haystack);
            let positions = if folded.is_ascii() {
                byte_offsets
            } else {
                char_offsets(&folded, &byte_offsets)
            };
            if let Some(record) = ExactMatchRecord::from_positions(positions) {
                exact_matches.insert(keyword.to_string(), record);
            }
        }
        timing.exact_phase = started.elapsed();

        let started = Instant::now();
        let unmatched = query
            .patterns()
            .map(|(keyword, _)| keyword)
            .filter(|keyword| !exact_matches.contains_key(*keyword));
        let fuzzy_matches = self.fuzzy.match_keywords(&folded, unmatched);
        timing.fuzzy_phase = started.elapsed();

        let total_score = relevance_score(&exact_matches, &fuzzy_matches, query.keywords());
        trace!(
            id = %document.id,
            exact = exact_matches.len(),
            fuzzy = fuzzy_matches.len(),
            score = total_score,
            "scored document"
        );

        if total_score <= 0.0 {
            return DocumentOutcome {
                scored: None,
                timing,
            };
        }

        let preview = if self.config.preview_chars == 0 {
            String::new()
        } else {
            preview(text, self.config.preview_chars)
        };

        let scored = ScoredDocument {
            document,
            exact_score: exact_matches.values().map(|r| r.count).sum(),
            fuzzy_score: fuzzy_matches.len(),
            exact_matches,
            fuzzy_matches,
            total_score,
            preview,
        };

        DocumentOutcome {
            scored: Some(scored),
            timing,
        }
    }

    /// Rank, cut to `top_n`, and stamp the result count.
    pub(crate) fn finish<'a>(
        &self,
        mut results: Vec<ScoredDocument<'a>>,
        mut timing: SearchTiming,
    ) -> SearchRun<'a> {
        debug!(
            exact_ms = timing.exact_phase_seconds() * 1000.0,
            fuzzy_ms = timing.fuzzy_phase_seconds() * 1000.0,
            matched = results.len(),
            "phases complete"
        );

        rank(&mut results, self.config.top_n);
        timing.results_returned = results.len();

        info!(
            algorithm = timing.algorithm.name(),
            scanned = timing.documents_scanned,
            skipped = timing.documents_skipped,
            returned = timing.results_returned,
            "search complete"
        );

        SearchRun { results, timing }
    }
}
