// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy and affix lookup for dictionary vocabularies.
//!
//! Dictionaries for morphologically rich languages have a lot of wordforms and
//! users who can't spell all of them. This crate answers three questions about
//! a fixed vocabulary: which entries start with this, which end with this, and
//! which are within a few typos of this.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌───────────────────┐
//! │  fuzzy/nfa   │────▶│   fuzzy/dfa   │────▶│   fuzzy/matcher   │
//! │ (Levenshtein │     │ (next valid   │     │  (skip search over│
//! │  automaton)  │     │   string)     │     │  sorted candidates│
//! └──────────────┘     └───────────────┘     └───────────────────┘
//!                                                      │
//!        ┌─────────────────┐                           ▼
//!        │ util/normalize  │──────────▶┌───────────────────────────┐
//!        │ (key folding)   │           │       index/affix         │
//!        └─────────────────┘           │ (prefix + suffix fst sets,│
//!                                      │   key → id map)           │
//!                                      └───────────────────────────┘
//!                                                      │
//!                                                      ▼
//!                                      ┌───────────────────────────┐
//!                                      │      index/shared         │
//!                                      │ (process-wide snapshot)   │
//!                                      └───────────────────────────┘
//! ```
//!
//! Fuzzy search never scans the vocabulary. The automaton for `(term, k)`
//! computes the smallest string it accepts that is `>=` a probe, the candidate
//! source returns the smallest word `>=` that, and the two leapfrog until one
//! runs out. Each step skips every word the automaton could never accept.
//!
//! # Usage
//!
//! ```
//! use skipdict::{find_all_matches, AffixIndex, SortedVocabulary};
//!
//! let words: SortedVocabulary = ["banana", "bandana", "cabana"].into_iter().collect();
//! let close: Vec<String> = find_all_matches("banana", 1, &words).unwrap().collect();
//! assert_eq!(close, ["banana", "bandana"]);
//!
//! let index = AffixIndex::build([("running", 1), ("runner", 2), ("jog", 3)]).unwrap();
//! assert_eq!(index.search_by_suffix("ing"), vec![1]);
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod util;

#[doc(hidden)]
pub mod testing;

pub use build::{build_from_path, load_vocabulary, read_json, read_tsv, VocabularyEntry};
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use fuzzy::{
    checked_edit_distance, find_all_matches, levenshtein_dfa, levenshtein_distance,
    levenshtein_nfa, levenshtein_within, CandidateSource, Dfa, FuzzyMatches, LookupFn, Matcher,
    Nfa, NfaState, SortedVocabulary, StateId, StateSet, Symbol, MAX_EDIT_DISTANCE,
};
pub use index::{AffixIndex, SharedIndex, WordformId};
pub use util::{normalize, DiacriticFolding, KeyNormalizer, Lowercase, NormalizationPolicy};
