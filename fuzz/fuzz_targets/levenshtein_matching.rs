// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Levenshtein automaton.
//!
//! The automaton must accept exactly what the dynamic-programming distance
//! says is close enough, and `next_valid_string` must hand back something it
//! accepts that is no smaller than the bound. If either lies, skip search
//! silently drops matches.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use skipdict::{levenshtein_dfa, levenshtein_distance};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    bound: String,
    k: u8,
}

/// Keep the first `max` chars.
fn cap(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

fuzz_target!(|input: MatchInput| {
    // Automaton size grows fast in k and term length.
    let query = cap(&input.query, 12);
    let target = cap(&input.target, 24);
    let bound = cap(&input.bound, 24);
    let k = u32::from(input.k % 3);

    let Ok(dfa) = levenshtein_dfa(query, k) else {
        return;
    };

    let expected = levenshtein_distance(query, target) <= k as usize;
    assert_eq!(
        dfa.accepts(target),
        expected,
        "query={:?} target={:?} k={}",
        query,
        target,
        k
    );

    if let Some(next) = dfa.next_valid_string(bound) {
        assert!(dfa.accepts(&next), "{:?} not accepted", next);
        assert!(next.as_str() >= bound, "{:?} < {:?}", next, bound);
        if dfa.accepts(bound) {
            assert_eq!(next, bound);
        }
    } else {
        assert!(!dfa.accepts(bound));
    }
});
