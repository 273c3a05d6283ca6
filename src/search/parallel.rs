// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rayon fan-out over documents.
//!
//! Workers share the query and searcher read-only and return one outcome per
//! document. `collect` keeps source order, so the reduction afterwards is the
//! same loop the sequential path runs, and ties rank the same way.

use rayon::prelude::*;

use crate::error::Result;
use crate::types::{Document, SearchRun};

use super::engine::{DocumentOutcome, Searcher};
use super::query::PreparedQuery;

impl Searcher {
    /// Score documents on the rayon pool, then rank as [`search`](Self::search) does.
    ///
    /// Phase durations are summed over documents, so they measure CPU time
    /// spent in each phase rather than wall-clock time.
    pub fn search_parallel<'a, S: AsRef<str>>(
        &self,
        documents: &'a [Document],
        keywords: &[S],
    ) -> Result<SearchRun<'a>> {
        let query = PreparedQuery::new(keywords, self.config().algorithm)?;
        Ok(self.search_prepared_parallel(documents, &query))
    }

    pub fn search_prepared_parallel<'a>(
        &self,
        documents: &'a [Document],
        query: &PreparedQuery,
    ) -> SearchRun<'a> {
        let outcomes: Vec<DocumentOutcome<'a>> = documents
            .par_iter()
            .map(|document| self.score_document(query, document))
            .collect();

        let mut results = Vec::with_capacity(outcomes.len());
        let mut timing = self.empty_timing();
        for outcome in outcomes {
            timing.absorb(&outcome.timing);
            results.extend(outcome.scored);
        }

        self.finish(results, timing)
    }
}
