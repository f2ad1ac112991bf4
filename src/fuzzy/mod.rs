// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via Levenshtein automata.
//!
//! Three layers, bottom-up: `nfa` builds the automaton for "within k edits of
//! the query" and determinizes it, `dfa` answers "smallest accepted string
//! `>= x`", and `matcher` uses that answer to hop through a sorted vocabulary.
//! `levenshtein` is the plain dynamic-programming distance the automaton is
//! checked against.

pub mod dfa;
mod levenshtein;
pub mod matcher;
pub mod nfa;

pub use dfa::{Dfa, StateId};
pub use levenshtein::*;
pub use matcher::{
    find_all_matches, CandidateSource, FuzzyMatches, LookupFn, Matcher, SortedVocabulary,
};
pub use nfa::{
    checked_edit_distance, levenshtein_dfa, levenshtein_nfa, Nfa, NfaState, StateSet, Symbol,
    MAX_EDIT_DISTANCE,
};
