// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for affix and fuzzy queries.
//!
//! Arbitrary vocabularies and arbitrary queries: nothing may panic, fuzzy
//! results must match a linear scan, and affix results must only contain ids
//! whose keys really carry the affix.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use skipdict::{levenshtein_distance, AffixIndex};

#[derive(Debug, Arbitrary)]
struct SearchInput {
    entries: Vec<(String, u16)>,
    query: String,
    k: u8,
}

fuzz_target!(|input: SearchInput| {
    if input.entries.len() > 64 || input.query.chars().count() > 10 {
        return;
    }
    let k = u32::from(input.k % 3);

    let Ok(index) = AffixIndex::build(
        input
            .entries
            .iter()
            .map(|(text, id)| (text.as_str(), u64::from(*id))),
    ) else {
        return;
    };

    let query = index.normalize(&input.query);

    for key in index.prefix_keys(&input.query) {
        assert!(key.starts_with(&query), "{:?} lacks prefix {:?}", key, query);
    }
    for key in index.suffix_keys(&input.query) {
        assert!(key.ends_with(&query), "{:?} lacks suffix {:?}", key, query);
    }

    let Ok(matches) = index.fuzzy_keys(&input.query, k) else {
        return;
    };
    let found: Vec<String> = matches.collect();
    let expected: Vec<String> = index
        .keys()
        .into_iter()
        .filter(|key| levenshtein_distance(&query, key) <= k as usize)
        .collect();
    assert_eq!(found, expected);
});
