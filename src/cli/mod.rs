// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions and command handlers for the skipdict binary.
//!
//! Four subcommands over a vocabulary file: `prefix`, `suffix` and `fuzzy`
//! query it, `inspect` summarizes the index built from it. Every query loads
//! the vocabulary fresh; this is a tool for poking at a word list, not a
//! server.

pub mod display;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use serde::Serialize;

use skipdict::{build_from_path, checked_edit_distance, levenshtein_distance};
use skipdict::{AffixIndex, SearchConfig, WordformId};

use display::{distance_label, format_size, key_line, row, section_bot, section_top};

#[derive(Parser)]
#[command(
    name = "skipdict",
    about = "Prefix, suffix and typo-tolerant lookup over dictionary vocabularies",
    version
)]
pub struct Cli {
    /// JSON search settings (thresholds, edit distance, normalization)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Entries whose normalized form starts with QUERY
    Prefix {
        /// Vocabulary file (text<TAB>id lines, or a .json array)
        vocab: PathBuf,
        query: String,
    },

    /// Entries whose normalized form ends with QUERY
    Suffix {
        /// Vocabulary file (text<TAB>id lines, or a .json array)
        vocab: PathBuf,
        query: String,
    },

    /// Entries within a few edits of QUERY
    Fuzzy {
        /// Vocabulary file (text<TAB>id lines, or a .json array)
        vocab: PathBuf,
        query: String,

        /// Maximum edit distance (defaults to the configured one)
        #[arg(short = 'k', long = "max-distance", allow_hyphen_values = true)]
        max_distance: Option<i64>,
    },

    /// Summarize the index built from a vocabulary
    Inspect {
        /// Vocabulary file (text<TAB>id lines, or a .json array)
        vocab: PathBuf,
    },
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct KeyHit {
    pub key: String,
    pub ids: Vec<WordformId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QueryReport {
    pub mode: &'static str,
    pub query: String,
    pub normalized: String,
    /// Set when the query was below the configured length threshold.
    pub skipped: bool,
    pub hits: Vec<KeyHit>,
}

impl QueryReport {
    fn new(mode: &'static str, query: &str, index: &AffixIndex) -> Self {
        Self {
            mode,
            query: query.to_string(),
            normalized: index.normalize(query),
            skipped: false,
            hits: Vec::new(),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    pub vocab: String,
    pub keys: usize,
    pub entries: usize,
    pub normalization: String,
    /// Bytes in the prefix and suffix fst sets combined.
    pub fst_bytes: usize,
    pub sample: Vec<String>,
}

/// Run a parsed command line, writing results to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Prefix { vocab, query } => {
            let index = open_index(&vocab, &config)?;
            let report = affix_query("prefix", &index, &query, &config);
            write_query(out, &report, cli.json)
        }
        Commands::Suffix { vocab, query } => {
            let index = open_index(&vocab, &config)?;
            let report = affix_query("suffix", &index, &query, &config);
            write_query(out, &report, cli.json)
        }
        Commands::Fuzzy {
            vocab,
            query,
            max_distance,
        } => {
            let k = match max_distance {
                Some(k) => checked_edit_distance(k).context("invalid --max-distance")?,
                None => config.max_edit_distance,
            };
            let index = open_index(&vocab, &config)?;
            let report = fuzzy_query(&index, &query, k, &config)?;
            write_query(out, &report, cli.json)
        }
        Commands::Inspect { vocab } => {
            let index = open_index(&vocab, &config)?;
            let report = inspect(&vocab, &index, &config);
            write_inspect(out, &report, cli.json)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn open_index(vocab: &Path, config: &SearchConfig) -> Result<AffixIndex> {
    build_from_path(vocab, config)
        .with_context(|| format!("failed to index vocabulary {}", vocab.display()))
}

pub fn affix_query(
    mode: &'static str,
    index: &AffixIndex,
    query: &str,
    config: &SearchConfig,
) -> QueryReport {
    let mut report = QueryReport::new(mode, query, index);
    if !config.allows_affix_search(query) {
        warn!(
            "{} search skipped: {:?} is shorter than {} characters",
            mode, query, config.affix_search_threshold
        );
        report.skipped = true;
        return report;
    }

    let keys = if mode == "suffix" {
        index.suffix_keys(query)
    } else {
        index.prefix_keys(query)
    };
    report.hits = keys
        .into_iter()
        .map(|key| KeyHit {
            ids: index.ids_for_key(&key).to_vec(),
            key,
            distance: None,
        })
        .collect();
    report
}

pub fn fuzzy_query(
    index: &AffixIndex,
    query: &str,
    max_distance: u32,
    config: &SearchConfig,
) -> Result<QueryReport> {
    let mut report = QueryReport::new("fuzzy", query, index);
    if !config.allows_fuzzy_search(query) {
        warn!(
            "fuzzy search skipped: {:?} is shorter than {} characters",
            query, config.fuzzy_search_threshold
        );
        report.skipped = true;
        return Ok(report);
    }

    let term = report.normalized.clone();
    report.hits = index
        .fuzzy_keys(query, max_distance)?
        .map(|key| KeyHit {
            ids: index.ids_for_key(&key).to_vec(),
            distance: Some(levenshtein_distance(&term, &key)),
            key,
        })
        .collect();
    Ok(report)
}

pub fn inspect(vocab: &Path, index: &AffixIndex, config: &SearchConfig) -> InspectReport {
    let keys = index.keys();
    InspectReport {
        vocab: vocab.display().to_string(),
        keys: keys.len(),
        entries: keys.iter().map(|key| index.ids_for_key(key).len()).sum(),
        normalization: format!("{:?}", config.normalization),
        fst_bytes: index.fst_bytes(),
        sample: keys.into_iter().take(5).collect(),
    }
}

fn write_query<W: Write>(out: &mut W, report: &QueryReport, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    let label = format!("{} {:?}", report.mode.to_uppercase(), report.normalized);
    writeln!(out, "{}", section_top(&label))?;
    if report.skipped {
        writeln!(out, "{}", row(" query too short, skipped"))?;
    } else if report.hits.is_empty() {
        writeln!(out, "{}", row(" no matches"))?;
    }
    for hit in &report.hits {
        let mut line = key_line(&hit.key, &hit.ids);
        if let Some(distance) = hit.distance {
            line = format!("{}  {}", line, distance_label(distance));
        }
        writeln!(out, "{}", row(&line))?;
    }
    writeln!(out, "{}", section_bot())?;
    Ok(())
}

fn write_inspect<W: Write>(out: &mut W, report: &InspectReport, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", section_top("VOCABULARY"))?;
    writeln!(out, "{}", row(&format!(" file          {}", report.vocab)))?;
    writeln!(out, "{}", row(&format!(" keys          {}", report.keys)))?;
    writeln!(out, "{}", row(&format!(" entries       {}", report.entries)))?;
    writeln!(out, "{}", row(&format!(" normalization {}", report.normalization)))?;
    writeln!(out, "{}", row(&format!(" fst size      {}", format_size(report.fst_bytes))))?;
    writeln!(out, "{}", row(&format!(" first keys    {}", report.sample.join(", "))))?;
    writeln!(out, "{}", section_bot())?;
    Ok(())
}
