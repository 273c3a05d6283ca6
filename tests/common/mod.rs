// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use cvrank::{Document, SearchRun};

// Re-export canonical test utilities from cvrank::testing
pub use cvrank::testing::{make_corpus, make_doc, make_unreadable_doc};

// ============================================================================
// FIXTURES
// ============================================================================

/// The worked example: three of four keywords present exactly.
pub const SCENARIO_TEXT: &str = "experienced python developer with react and sql skills";

pub const SCENARIO_KEYWORDS: [&str; 4] = ["python", "react", "sql", "golang"];

/// A small, varied corpus of CV bodies.
pub fn cv_corpus() -> Vec<Document> {
    make_corpus(&[
        "Backend engineer. Python, Django and PostgreSQL. Some Go.",
        "Frontend developer: React, TypeScript, CSS. Familiar with javascrpt tooling.",
        "Data scientist with python and sql. Pandas, numpy, scikit-learn.",
        "Gardener and carpenter. No software experience.",
        "Full-stack: python react sql docker kubernetes python python",
    ])
}

// ============================================================================
// HELPERS
// ============================================================================

/// Result ids in rank order.
pub fn ranked_ids<'a>(run: &'a SearchRun<'_>) -> Vec<&'a str> {
    run.results.iter().map(|r| r.document.id.as_str()).collect()
}

/// Write `(file name, contents)` pairs into `dir`.
pub fn write_corpus(dir: &Path, files: &[(&str, &str)]) {
    for (name, contents) in files {
        fs::write(dir.join(name), contents).expect("write fixture");
    }
}
