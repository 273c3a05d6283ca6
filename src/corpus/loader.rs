// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::Document;

use super::manifest::{CorpusManifest, DocumentSource};

pub const MANIFEST_FILE: &str = "manifest.json";

/// Work out which files make up the corpus at `dir`.
pub fn discover_sources(dir: &Path) -> Result<Vec<DocumentSource>> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if manifest_path.is_file() {
        let raw = fs::read_to_string(&manifest_path).map_err(|e| Error::io(&manifest_path, e))?;
        let manifest: CorpusManifest =
            serde_json::from_str(&raw).map_err(|e| Error::json(&manifest_path, e))?;
        debug!(entries = manifest.documents.len(), "using corpus manifest");
        return Ok(manifest
            .documents
            .into_iter()
            .map(|entry| entry.into_source(dir))
            .collect());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }
    paths.sort();
    debug!(files = paths.len(), "scanned corpus directory");

    Ok(paths
        .into_iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            DocumentSource {
                id: stem.clone(),
                label: stem,
                path,
            }
        })
        .collect())
}

/// Read one source. Failure yields a document without text.
pub fn load_source(source: &DocumentSource) -> Document {
    let reference = source.path.display().to_string();
    match fs::read_to_string(&source.path) {
        Ok(text) => Document::new(source.id.clone(), text)
            .with_label(source.label.clone())
            .with_reference(reference),
        Err(e) => {
            warn!(id = %source.id, path = %reference, error = %e, "could not read document");
            Document::unreadable(source.id.clone(), reference).with_label(source.label.clone())
        }
    }
}

/// Load every document in the corpus at `dir`, in corpus order.
pub fn load_corpus(dir: &Path) -> Result<Vec<Document>> {
    let sources = discover_sources(dir)?;

    #[cfg(feature = "parallel")]
    let documents = sources.par_iter().map(load_source).collect();
    #[cfg(not(feature = "parallel"))]
    let documents = sources.iter().map(load_source).collect();

    Ok(documents)
}

/// [`load_corpus`] with a progress bar ticking once per file.
#[cfg(feature = "parallel")]
pub fn load_corpus_with_progress(dir: &Path, progress: &ProgressBar) -> Result<Vec<Document>> {
    let sources = discover_sources(dir)?;
    let total = sources.len();
    let counter = AtomicUsize::new(0);
    progress.set_length(total as u64);

    let documents = sources
        .par_iter()
        .map(|source| {
            let document = load_source(source);

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            document
        })
        .collect();

    Ok(documents)
}
