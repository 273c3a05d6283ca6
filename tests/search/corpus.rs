// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! From a directory on disk to a ranked run.

use super::common::{ranked_ids, write_corpus};
use cvrank::{load_corpus, search, SearchConfig};

#[test]
fn test_directory_of_text_files() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("03-carol.txt", "react native and sql"),
            ("01-alice.txt", "python python sql"),
            ("02-bob.txt", "java spring"),
            ("readme.md", "python react sql"),
        ],
    );

    let docs = load_corpus(dir.path()).unwrap();
    assert_eq!(docs.len(), 3);

    let run = search(&docs, &["python", "react", "sql"], &SearchConfig::default()).unwrap();
    assert_eq!(ranked_ids(&run), vec!["01-alice", "03-carol"]);
    assert_eq!(run.timing.documents_scanned, 3);
}

#[test]
fn test_manifest_with_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("alice.txt", "golang and rust"),
            (
                "manifest.json",
                r#"{"documents": [
                    {"id": "a", "path": "alice.txt", "label": "Alice Ng"},
                    {"id": "b", "path": "scanned.pdf.txt", "label": "Bo Li"}
                ]}"#,
            ),
        ],
    );

    let docs = load_corpus(dir.path()).unwrap();
    assert_eq!(docs.len(), 2);

    let run = search(&docs, &["rust"], &SearchConfig::default()).unwrap();
    assert_eq!(ranked_ids(&run), vec!["a"]);
    assert_eq!(run.results[0].document.label, "Alice Ng");
    assert_eq!(run.timing.documents_skipped, 1);
}
