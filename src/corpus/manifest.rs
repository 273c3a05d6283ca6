// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Optional `manifest.json` at the corpus root.
///
/// ```json
/// { "documents": [ { "id": "cv-1", "path": "alice.txt", "label": "Alice" } ] }
/// ```
#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct CorpusManifest {
    pub documents: Vec<ManifestEntry>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ManifestEntry {
    pub id: String,
    /// Relative to the corpus directory.
    pub path: PathBuf,
    #[serde(default)]
    pub label: Option<String>,
}

/// One file to read, however it was discovered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSource {
    pub id: String,
    pub label: String,
    pub path: PathBuf,
}

impl ManifestEntry {
    pub fn into_source(self, root: &Path) -> DocumentSource {
        DocumentSource {
            label: self.label.unwrap_or_else(|| self.id.clone()),
            path: root.join(self.path),
            id: self.id,
        }
    }
}
