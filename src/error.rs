// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by index construction, automaton building and loading.
//!
//! Queries never fail: a prefix, suffix or fuzzy search with nothing to find
//! returns an empty result. Errors are reserved for bad arguments (an edit
//! distance the automaton cannot honour) and for the I/O edges.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A signed edit distance below zero was handed to the matcher.
    #[error("edit distance must be non-negative, got {requested}")]
    NegativeEditDistance { requested: i64 },

    /// The automaton for this distance would be impractically large.
    #[error("edit distance {requested} exceeds the supported maximum of {max}")]
    EditDistanceTooLarge { requested: u32, max: u32 },

    #[error("completion structure: {0}")]
    Fst(#[from] fst::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Config(#[from] serde_json::Error),

    /// A vocabulary file line that is not `text<TAB>id`.
    #[error("vocabulary line {line}: {reason}")]
    VocabularyLine { line: usize, reason: String },
}
