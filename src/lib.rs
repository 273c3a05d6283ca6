// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword ranking for CV text: exact substring search fused with edit-distance
//! fuzzy matching.
//!
//! Given a corpus of already-extracted document texts and a handful of
//! keywords, every document gets a relevance score built from exact
//! occurrences, near-miss tokens and keyword coverage, and the corpus comes
//! back ranked.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  exact/     │────▶│  fuzzy/      │────▶│  scoring/   │────▶│  search/    │
//! │ (KMP, BM    │     │ (Levenshtein,│     │ (weighted   │     │ (per-doc    │
//! │  bad-char)  │     │  top-5 hits) │     │  score,rank)│     │  pipeline)  │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!        ▲                                                            │
//!        │                    ┌──────────────┐                        │
//!        └────────────────────│  types.rs    │◀───────────────────────┘
//!                             │ (Document,   │
//!                             │  SearchRun)  │
//!                             └──────────────┘
//! ```
//!
//! `corpus` and `config` sit outside the core: one turns a directory into
//! documents, the other a JSON file into a [`SearchConfig`].
//!
//! # Usage
//!
//! ```
//! use cvrank::{search, Document, SearchConfig};
//!
//! let docs = vec![Document::new("cv-1", "experienced python developer with react and sql skills")];
//! let run = search(&docs, &["python", "react", "sql", "golang"], &SearchConfig::default()).unwrap();
//!
//! assert_eq!(run.results[0].total_score, 7.13);
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod exact;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
pub mod utils;

// Re-exports for public API
pub use config::{SearchConfig, DEFAULT_PREVIEW_CHARS};
pub use corpus::load_corpus;
pub use error::{Error, Result};
pub use exact::{find_all, find_first, Algorithm, CompiledPattern, PatternSearch};
pub use fuzzy::{levenshtein_distance, similarity, FuzzyMatcher};
pub use scoring::{relevance_score, score_breakdown, ScoreBreakdown};
pub use search::{search, PreparedQuery, Searcher};
pub use types::{
    Document, ExactMatchRecord, ExactMatches, FuzzyCandidate, FuzzyMatchRecord, FuzzyMatches,
    ScoredDocument, SearchRun, SearchTiming,
};
pub use utils::{parse_keywords, preview};
