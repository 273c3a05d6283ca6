// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keywords normalized and compiled once per run.

use crate::error::{Error, Result};
use crate::exact::{Algorithm, CompiledPattern};
use crate::utils::normalize_keywords;

/// A normalized keyword list plus one compiled pattern per distinct keyword.
///
/// `keywords` keeps duplicates, since scoring counts them. `patterns` does not:
/// searching the same bytes twice would only produce the same positions.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    keywords: Vec<String>,
    patterns: Vec<(String, CompiledPattern)>,
}

impl PreparedQuery {
    /// Fails with [`Error::NoKeywords`] if nothing survives normalization.
    pub fn new<S: AsRef<str>>(keywords: &[S], algorithm: Algorithm) -> Result<Self> {
        let keywords = normalize_keywords(keywords);
        if keywords.is_empty() {
            return Err(Error::NoKeywords);
        }
        let mut patterns: Vec<(String, CompiledPattern)> = Vec::with_capacity(keywords.len());

        for keyword in &keywords {
            if patterns.iter().any(|(k, _)| k == keyword) {
                continue;
            }
            patterns.push((keyword.clone(), algorithm.compile(keyword.as_bytes())));
        }

        Ok(Self { keywords, patterns })
    }

    /// Normalized keywords in request order, duplicates included.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Distinct keywords with their compiled patterns, in first-seen order.
    pub fn patterns(&self) -> impl Iterator<Item = (&str, &CompiledPattern)> {
        self.patterns.iter().map(|(k, p)| (k.as_str(), p))
    }

    pub fn distinct_len(&self) -> usize {
        self.patterns.len()
    }
}
