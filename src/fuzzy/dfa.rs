// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deterministic automaton with a "next accepted string" query.
//!
//! The one operation that matters here is [`Dfa::next_valid_string`]: given a
//! lower bound `x`, return the smallest string the automaton accepts that is
//! `>= x`. That is what lets the matcher leap over whole stretches of a sorted
//! vocabulary instead of testing every word.
//!
//! # Representation
//!
//! States are dense `u32` ids. Each state keeps its explicit edges sorted by
//! label, so "the smallest label `>= c`" is a binary search, plus an optional
//! default edge taken for any symbol without an explicit one.
//!
//! # Ordering
//!
//! Labels are compared as Unicode scalar values. UTF-8 preserves scalar order
//! under byte comparison, so the automaton's order is exactly `str`'s `Ord`,
//! and the sorted vocabulary and the automaton agree on what "next" means.

pub type StateId = u32;

#[derive(Debug, Clone, Default)]
struct State {
    /// Explicit edges, sorted by label.
    edges: Vec<(char, StateId)>,
    default: Option<StateId>,
    is_final: bool,
}

impl State {
    fn edge(&self, label: char) -> Option<StateId> {
        self.edges
            .binary_search_by_key(&label, |&(l, _)| l)
            .ok()
            .map(|pos| self.edges[pos].1)
    }
}

#[derive(Debug, Clone)]
pub struct Dfa {
    states: Vec<State>,
    start: StateId,
}

impl Dfa {
    /// A one-state automaton; more states are added during construction.
    pub(crate) fn with_start(is_final: bool) -> Self {
        Self {
            states: vec![State {
                is_final,
                ..State::default()
            }],
            start: 0,
        }
    }

    pub(crate) fn add_state(&mut self, is_final: bool) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(State {
            is_final,
            ..State::default()
        });
        id
    }

    pub(crate) fn add_transition(&mut self, src: StateId, label: char, dest: StateId) {
        let edges = &mut self.states[src as usize].edges;
        match edges.binary_search_by_key(&label, |&(l, _)| l) {
            Ok(pos) => edges[pos].1 = dest,
            Err(pos) => edges.insert(pos, (label, dest)),
        }
    }

    pub(crate) fn set_default_transition(&mut self, src: StateId, dest: StateId) {
        self.states[src as usize].default = Some(dest);
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.states[state as usize].is_final
    }

    /// Follow the explicit edge for `input`, or the default edge.
    /// `None` is the dead state.
    pub fn next_state(&self, state: StateId, input: char) -> Option<StateId> {
        let state = &self.states[state as usize];
        state.edge(input).or(state.default)
    }

    /// Does the automaton accept `input` as a whole?
    pub fn accepts(&self, input: &str) -> bool {
        let mut state = self.start;
        for c in input.chars() {
            match self.next_state(state, c) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_final(state)
    }

    /// The smallest accepted string `>= input`, if any.
    ///
    /// First walks `input` as far as the automaton allows, leaving one stack
    /// frame per step: "from this state, after this prefix, symbol `c` was
    /// tried". If the walk consumed everything and landed on an accepting
    /// state, `input` itself is the answer. Otherwise the frames are unwound
    /// wall-following style: each frame tries the smallest symbol above the
    /// one it already tried, and the first extension that exists is followed
    /// greedily down its smallest edges until it accepts.
    ///
    /// The greedy descent never needs to back up. Every materialized state
    /// can reach an accepting state (the dead state is never stored), so once
    /// an edge is found the smallest completion below it exists.
    pub fn next_valid_string(&self, input: &str) -> Option<String> {
        // (prefix length in bytes, state reached by the prefix, symbol tried)
        let mut stack: Vec<(usize, StateId, Option<char>)> = Vec::new();
        let mut path = String::with_capacity(input.len() + 1);
        let mut state = self.start;
        let mut walked_all = true;

        for c in input.chars() {
            stack.push((path.len(), state, Some(c)));
            match self.next_state(state, c) {
                Some(next) => {
                    state = next;
                    path.push(c);
                }
                None => {
                    walked_all = false;
                    break;
                }
            }
        }

        if walked_all {
            if self.is_final(state) {
                return Some(path);
            }
            stack.push((path.len(), state, None));
        }

        while let Some((prefix_len, state, tried)) = stack.pop() {
            let Some(label) = self.find_next_edge(state, tried) else {
                continue;
            };
            let Some(next) = self.next_state(state, label) else {
                continue;
            };
            path.truncate(prefix_len);
            path.push(label);
            if self.is_final(next) {
                return Some(path);
            }
            stack.push((path.len(), next, None));
        }

        None
    }

    /// Smallest symbol strictly above `tried` (or the smallest symbol at all)
    /// that leaves `state` somewhere.
    fn find_next_edge(&self, state: StateId, tried: Option<char>) -> Option<char> {
        let candidate = match tried {
            None => '\0',
            Some(c) => successor(c)?,
        };
        let state = &self.states[state as usize];
        if state.default.is_some() || state.edge(candidate).is_some() {
            return Some(candidate);
        }
        let pos = state.edges.partition_point(|&(label, _)| label < candidate);
        state.edges.get(pos).map(|&(label, _)| label)
    }
}

/// The next Unicode scalar value, skipping the surrogate gap.
fn successor(c: char) -> Option<char> {
    match c {
        '\u{D7FF}' => Some('\u{E000}'),
        char::MAX => None,
        _ => char::from_u32(c as u32 + 1),
    }
}
