// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Direct edit distance: the slow, obviously-correct reference.
//!
//! The automaton never calls into this module. It exists so that every claim
//! the automaton makes can be checked against the textbook O(nm) recurrence,
//! in tests, in the fuzzer, and by callers that want the actual distance of a
//! match (the skip search only tells you "within k").
//!
//! Edit model: insertion, deletion, substitution, each cost 1. No
//! transpositions, same as the automaton.

/// Edit distance between `a` and `b`, counted in `char`s.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        advance_row(&mut row, i, ac, &b_chars);
    }

    row[b_chars.len()]
}

/// Are these strings within `max` edits of each other?
///
/// Bounded Levenshtein with two early exits:
/// 1. If the length difference exceeds `max`, return false immediately
/// 2. If the minimum of a DP row exceeds `max`, abandon the DP
///
/// Both are sound: the length difference is a lower bound on the distance,
/// and row minima never decrease.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_chars: Vec<char> = b.chars().collect();

    if a_len.abs_diff(b_chars.len()) > max {
        return false;
    }

    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let min_row = advance_row(&mut row, i, ac, &b_chars);
        if min_row > max {
            return false;
        }
    }

    row[b_chars.len()] <= max
}

/// Replace `row` (distances for `a[..i]`) with distances for `a[..=i]`.
/// Returns the minimum of the new row.
fn advance_row(row: &mut [usize], i: usize, ac: char, b_chars: &[char]) -> usize {
    let mut diagonal = row[0];
    row[0] = i + 1;
    let mut min_row = row[0];

    for (j, &bc) in b_chars.iter().enumerate() {
        let above = row[j + 1];
        let cost = usize::from(ac != bc);
        row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
        diagonal = above;
        min_row = min_row.min(row[j + 1]);
    }

    min_row
}
