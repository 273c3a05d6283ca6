// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search run: exact → fuzzy → score → rank, once per document.
//!
//! For every document with text:
//!
//! 1. **Exact phase.** Each distinct keyword, compiled once for the configured
//!    algorithm, is searched in the case-folded text.
//! 2. **Fuzzy phase.** Keywords with no exact hit are compared against the
//!    document's tokens by edit distance.
//! 3. **Score.** Both evidence maps and the keyword list go through
//!    [`relevance_score`](crate::scoring::relevance_score). Zero drops the document.
//!
//! Then the survivors are ranked (stable, descending) and cut to `top_n`.
//!
//! Per-document work touches nothing shared and mutable, so the `parallel`
//! feature fans it out with rayon. Timing and results are only combined after
//! every document is done, which keeps the ranking identical to the sequential
//! run.

mod engine;
#[cfg(feature = "parallel")]
mod parallel;
mod query;

pub use engine::Searcher;
pub use query::PreparedQuery;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::types::{Document, SearchRun};

/// Rank `documents` against `keywords` with `config`, sequentially.
///
/// Fails if the configuration is invalid or no keyword survives normalization.
pub fn search<'a, S: AsRef<str>>(
    documents: &'a [Document],
    keywords: &[S],
    config: &SearchConfig,
) -> Result<SearchRun<'a>> {
    Searcher::new(*config)?.search(documents, keywords)
}
