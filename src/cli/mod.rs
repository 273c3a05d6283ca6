// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cvrank command-line interface.
//!
//! Two subcommands: `search` ranks a corpus directory against a keyword list,
//! and `compare` runs the same query once per exact-match algorithm to show
//! their timings side by side and confirm they agree.

pub mod display;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use cvrank::{Algorithm, SearchConfig};

#[derive(Parser)]
#[command(
    name = "cvrank",
    about = "Rank CV text by keyword relevance (exact + fuzzy matching)",
    version
)]
pub struct Cli {
    /// Log debug events to stderr (CVRANK_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank every document in a corpus directory
    Search {
        #[command(flatten)]
        query: QueryArgs,

        /// Exact-match algorithm: kmp or boyer-moore
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Keep only the best N results (0 keeps all)
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// Print the whole run as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Score documents on one thread
        #[arg(long)]
        sequential: bool,
    },

    /// Run both exact-match algorithms over a corpus and compare them
    Compare {
        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Arguments shared by every subcommand.
#[derive(Args)]
pub struct QueryArgs {
    /// Corpus directory: *.txt files, or a manifest.json listing them
    pub corpus: PathBuf,

    /// Comma-separated keywords, e.g. "python, react, sql"
    #[arg(short, long)]
    pub keywords: String,

    /// Minimum similarity for fuzzy matches, in (0, 1]
    #[arg(short = 't', long)]
    pub threshold: Option<f64>,

    /// JSON config file; flags given here override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl QueryArgs {
    /// Config file (or defaults) with this invocation's overrides applied.
    pub fn base_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SearchConfig::default(),
        };
        if let Some(threshold) = self.threshold {
            config = config.with_similarity_threshold(threshold);
        }
        config.validate()?;
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<SearchConfig> {
    SearchConfig::from_json_file(path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}

/// Apply `search`-only flags on top of the shared config.
pub fn search_config(
    query: &QueryArgs,
    algorithm: Option<Algorithm>,
    top: Option<usize>,
) -> Result<SearchConfig> {
    let mut config = query.base_config()?;
    if let Some(algorithm) = algorithm {
        config = config.with_algorithm(algorithm);
    }
    if top.is_some() {
        config = config.with_top_n(top);
    }
    Ok(config)
}
