//
// Copyright (c) 2025 10x Genomics, Inc. All rights reserved.
//
//! bm_search
//!
//! Command line front end: loads the sequence and pattern FASTA files, runs the
//! Boyer-Moore search and prints one `bcr_wins / matches / positions...` line per
//! pattern.
#![deny(missing_docs)]

use anyhow::{Context, Result};
use boyer_moore::{render_reports, BoyerMoore, SearchReport};
use clap::Parser;
use fasta_input::{read_patterns, read_subject, PatternRecord};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub mod mylog;

/// Count pattern occurrences in a sequence with the Boyer-Moore algorithm
#[derive(Parser, Debug)]
#[clap(name = "bm_search", version)]
pub struct BmSearch {
    /// FASTA file with the sequence to search
    pub sequence: PathBuf,

    /// FASTA file with one record per pattern
    pub patterns: PathBuf,

    /// Also write the reports, with pattern ids, as JSON to this file
    #[clap(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Number of match positions to print per pattern. Defaults to
    /// max_reported_positions from parameters.toml, or 10.
    #[clap(long, value_name = "N")]
    pub max_positions: Option<usize>,

    /// Search the patterns one after the other on the calling thread
    #[clap(long)]
    pub sequential: bool,
}

#[derive(Serialize)]
struct PatternReport<'a> {
    index: usize,
    id: &'a str,
    pattern: String,
    #[serde(flatten)]
    report: &'a SearchReport,
}

fn write_json(path: &Path, patterns: &[PatternRecord], reports: &[SearchReport]) -> Result<()> {
    let rows: Vec<_> = patterns
        .iter()
        .zip(reports)
        .enumerate()
        .map(|(index, (pattern, report))| PatternReport {
            index,
            id: &pattern.id,
            pattern: String::from_utf8_lossy(pattern.seq()).into_owned(),
            report,
        })
        .collect();
    let mut writer =
        BufWriter::new(File::create(path).with_context(|| path.display().to_string())?);
    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writer.flush()?;
    Ok(())
}

/// Run the search and print the reports to `out`.
///
/// Nothing is printed unless every input could be loaded and every pattern is valid.
pub fn run(args: &BmSearch, out: &mut impl Write) -> Result<Vec<SearchReport>> {
    let max_positions = match args.max_positions {
        Some(n) => n,
        None => *parameters_toml::max_reported_positions()?,
    };
    let parallel = !args.sequential && *parameters_toml::parallel_patterns()?;

    let subject = read_subject(&args.sequence).context("Failed to load the sequence")?;
    let patterns = read_patterns(&args.patterns).context("Failed to load the patterns")?;
    let searcher = BoyerMoore::new(&subject, &patterns)
        .with_context(|| format!("Invalid patterns in {}", args.patterns.display()))?;
    info!(
        "searching {} patterns over {} symbols{}",
        patterns.len(),
        searcher.alphabet().len(),
        if parallel { " in parallel" } else { "" }
    );

    let reports = if parallel {
        searcher.par_search(max_positions)
    } else {
        searcher.search(max_positions)
    };
    let total_matches: usize = reports.iter().map(|r| r.match_count).sum();
    info!("found {total_matches} matches in total");

    if let Some(json) = &args.json {
        write_json(json, &patterns, &reports).context("Failed to write the JSON report")?;
    }
    writeln!(out, "{}", render_reports(&reports))?;
    out.flush()?;
    Ok(reports)
}
