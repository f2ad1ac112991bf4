// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and a brute-force oracle so every test
//! checks the automaton against the same thing.

#![doc(hidden)]

use crate::fuzzy::{levenshtein_distance, SortedVocabulary};
use crate::index::{AffixIndex, WordformId};

/// The classic skip-search fixture: four words within one edit of "banana",
/// three that are not.
pub const BANANAS: [&str; 7] = [
    "banana", "banann", "banne", "canana", "bbbnana", "baxana", "xbananax",
];

/// Entries within one edit of "banana", in vocabulary order.
pub const BANANA_MATCHES: [&str; 4] = ["banana", "banann", "baxana", "canana"];

/// A few Plains Cree wordforms, with diacritics, and their ids.
pub const CREE_WORDFORMS: [(&str, WordformId); 6] = [
    ("wâpamêw", 1),
    ("wâpahtam", 2),
    ("nipâw", 3),
    ("nipâwin", 4),
    ("atim", 5),
    ("atimwa", 6),
];

pub fn banana_vocabulary() -> SortedVocabulary {
    SortedVocabulary::new(BANANAS)
}

pub fn running_index() -> AffixIndex {
    make_index(&[("run", 10), ("running", 11), ("runner", 12), ("jog", 13)])
}

/// Build an index with the default normalizer, panicking on failure.
pub fn make_index(entries: &[(&str, WordformId)]) -> AffixIndex {
    AffixIndex::build(entries.iter().copied()).expect("fixture index builds")
}

/// Every word within `k` edits of `term`, by checking all of them.
pub fn brute_force_matches<'a, I>(term: &str, k: u32, words: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut found: Vec<String> = words
        .into_iter()
        .filter(|word| levenshtein_distance(term, word) <= k as usize)
        .map(str::to_string)
        .collect();
    found.sort_unstable();
    found.dedup();
    found
}
