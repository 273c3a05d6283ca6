// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading: a directory of extracted CV text.
//!
//! With a `manifest.json` at the root, its entries decide ids, labels and
//! order. Without one, every `*.txt` file in the directory is a document, in
//! file-name order, with the file stem as id and label.
//!
//! A file that cannot be read becomes a document without text (and a warning),
//! which the search skips. Only a missing directory or a broken manifest is an
//! error.

pub mod loader;
pub mod manifest;

pub use loader::*;
pub use manifest::*;
