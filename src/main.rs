// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cvrank::{parse_keywords, Algorithm, Document, SearchConfig, SearchRun, Searcher};

mod cli;
use cli::display::*;
use cli::{search_config, Cli, Commands, QueryArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Search {
            query,
            algorithm,
            top,
            json,
            sequential,
        } => run_search(&query, algorithm, top, json, sequential),
        Commands::Compare { query } => run_compare(&query),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Events go to stderr so `--json` output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("CVRANK_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ═══════════════════════════════════════════════════════════════════════════
// CORPUS
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(feature = "parallel")]
fn load_documents(dir: &Path) -> Result<Vec<Document>> {
    use indicatif::{ProgressBar, ProgressStyle};

    let style = ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .map(|s| s.progress_chars("━━╸"))
    .unwrap_or_else(|_| ProgressStyle::default_bar());

    let progress = ProgressBar::new(0);
    progress.set_style(style);
    progress.set_prefix("Loading");
    progress.set_message("documents...");

    let documents = cvrank::corpus::load_corpus_with_progress(dir, &progress)
        .with_context(|| format!("Failed to load corpus {}", dir.display()))?;
    progress.finish_and_clear();
    Ok(documents)
}

#[cfg(not(feature = "parallel"))]
fn load_documents(dir: &Path) -> Result<Vec<Document>> {
    cvrank::load_corpus(dir).with_context(|| format!("Failed to load corpus {}", dir.display()))
}

fn keywords_of(query: &QueryArgs) -> Vec<String> {
    parse_keywords(&query.keywords)
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(
    query: &QueryArgs,
    algorithm: Option<Algorithm>,
    top: Option<usize>,
    json: bool,
    sequential: bool,
) -> Result<()> {
    let config = search_config(query, algorithm, top)?;
    let keywords = keywords_of(query);
    let documents = load_documents(&query.corpus)?;
    let searcher = Searcher::new(config)?;

    let run = execute(&searcher, &documents, &keywords, sequential)?;

    if json {
        let out = serde_json::to_string_pretty(&run).context("Failed to serialize results")?;
        println!("{}", out);
    } else {
        print_results(&run, &config);
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn execute<'a>(
    searcher: &Searcher,
    documents: &'a [Document],
    keywords: &[String],
    sequential: bool,
) -> Result<SearchRun<'a>> {
    let run = if sequential {
        searcher.search(documents, keywords)?
    } else {
        searcher.search_parallel(documents, keywords)?
    };
    Ok(run)
}

#[cfg(not(feature = "parallel"))]
fn execute<'a>(
    searcher: &Searcher,
    documents: &'a [Document],
    keywords: &[String],
    _sequential: bool,
) -> Result<SearchRun<'a>> {
    Ok(searcher.search(documents, keywords)?)
}

fn print_results(run: &SearchRun<'_>, config: &SearchConfig) {
    println!();
    section_top("RESULTS");

    if run.results.is_empty() {
        row(&themed(GRAY, &[], "No document matched any keyword."));
    } else {
        row(&themed(
            GRAY,
            &[BOLD],
            &format!(
                "{}  {}  {}  {}  {}",
                pad_left("#", 3),
                pad_right("CANDIDATE", 40),
                pad_left("EXACT", 6),
                pad_left("FUZZY", 6),
                pad_left("SCORE", 6)
            ),
        ));
    }

    for (rank, scored) in run.results.iter().enumerate() {
        let candidate = truncate(&scored.document.label, 40);
        row(&format!(
            "{}  {}  {}  {}  {}",
            pad_left(&(rank + 1).to_string(), 3),
            pad_right(&themed(BLUE, &[BOLD], &candidate), 40),
            pad_left(&scored.exact_score.to_string(), 6),
            pad_left(&scored.fuzzy_score.to_string(), 6),
            score_value(scored.total_score)
        ));

        let mut evidence: Vec<String> = scored
            .exact_matches
            .iter()
            .map(|(keyword, record)| exact_badge(keyword, record.count))
            .collect();
        evidence.extend(scored.fuzzy_matches.iter().filter_map(|(keyword, record)| {
            record
                .best()
                .map(|best| fuzzy_badge(keyword, &best.word, best.similarity))
        }));
        row(&format!("     {}", evidence.join(" ")));

        if !scored.preview.is_empty() {
            let flat = scored.preview.split_whitespace().collect::<Vec<_>>().join(" ");
            row(&format!("     {}", themed(GRAY, &[DIM], &truncate(&flat, BOX_WIDTH - 6))));
        }
    }

    let timing = &run.timing;
    section_mid("TIMING");
    row(&format!(
        "Exact Match ({}): {} CVs scanned in {}",
        themed(BLUE, &[BOLD], timing.algorithm.name()),
        timing.documents_scanned,
        timing_ms(timing.exact_phase_seconds())
    ));
    row(&format!(
        "Fuzzy Match (≥ {:.2}): {}",
        config.similarity_threshold,
        timing_ms(timing.fuzzy_phase_seconds())
    ));
    let mut summary = format!(
        "{} of {} returned",
        timing.results_returned, timing.documents_scanned
    );
    if timing.documents_skipped > 0 {
        summary.push_str(&format!(", {} without text", timing.documents_skipped));
    }
    row(&summary);
    section_bot();
    println!();
}

// ═══════════════════════════════════════════════════════════════════════════
// COMPARE
// ═══════════════════════════════════════════════════════════════════════════

fn run_compare(query: &QueryArgs) -> Result<()> {
    let base = query.base_config()?;
    let keywords = keywords_of(query);
    let documents = load_documents(&query.corpus)?;

    let mut runs = Vec::new();
    for algorithm in Algorithm::all() {
        let searcher = Searcher::new(base.with_algorithm(algorithm))?;
        runs.push(searcher.search(&documents, &keywords)?);
    }

    println!();
    section_top("ALGORITHMS");
    for run in &runs {
        let timing = &run.timing;
        row(&format!(
            "{}  exact phase {}  {} results",
            pad_right(&themed(BLUE, &[BOLD], timing.algorithm.name()), 4),
            pad_left(&timing_ms(timing.exact_phase_seconds()), 9),
            timing.results_returned
        ));
    }

    let agree = runs.windows(2).all(|pair| pair[0].results == pair[1].results);
    section_mid("AGREEMENT");
    row(&format!(
        "Same matches and ranking across {} CVs: {}",
        documents.len(),
        verdict(agree)
    ));
    section_bot();
    println!();

    if !agree {
        anyhow::bail!("exact-match algorithms disagree");
    }
    Ok(())
}
