// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Read-only for the duration of a run. The CLI builds one from an optional
//! JSON file and then applies its flags on top:
//!
//! ```json
//! {
//!   "algorithm": "kmp",
//!   "similarityThreshold": 0.8,
//!   "topN": 10,
//!   "previewChars": 500
//! }
//! ```
//!
//! Every field is optional; missing ones take the defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::exact::Algorithm;
use crate::fuzzy::{FuzzyMatcher, DEFAULT_SIMILARITY_THRESHOLD};

/// Characters of document text kept in each result's preview.
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Minimum similarity for a fuzzy candidate, in `(0, 1]`.
    pub similarity_threshold: f64,
    /// Keep only the best `n` results. `None` or `0` keeps all.
    pub top_n: Option<usize>,
    /// `0` disables previews.
    pub preview_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            top_n: None,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl SearchConfig {
    /// Load a config from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: SearchConfig = serde_json::from_str(&raw).map_err(|e| Error::json(path, e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_top_n(mut self, top_n: Option<usize>) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    /// Reject thresholds outside `(0, 1]` (NaN included).
    pub fn validate(&self) -> Result<()> {
        FuzzyMatcher::new(self.similarity_threshold).map(|_| ())
    }
}
