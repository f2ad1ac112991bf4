// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein NFA and subset construction.
//!
//! The automaton for "every string within k edits of `term`" has one NFA state
//! per `(position, edits)` pair: how much of the term has been matched and how
//! much of the edit budget is spent. Reading a symbol either matches
//! `term[position]` for free, or spends one edit on a substitution or an
//! insertion. Deleting a term symbol consumes no input, so it is an epsilon
//! move.
//!
//! ```text
//!            term[i]                 ANY (insert)
//!   (i, e) ──────────▶ (i+1, e)    (i, e) ────────▶ (i, e+1)
//!
//!            ANY (substitute)        ε (delete)
//!   (i, e) ──────────▶ (i+1, e+1)  (i, e) ────────▶ (i+1, e+1)
//! ```
//!
//! `to_dfa` runs the textbook subset construction over that NFA. The state
//! sets are keyed by value (`BTreeSet` is ordered and hashable), mapped to
//! dense ids, and `ANY` edges collapse into a per-state default transition.
//!
//! # Size
//!
//! Every transition raises `position + edits` for each state it touches, so
//! the DFA is acyclic and its depth is at most `len(term) + k`. The number of
//! states still grows quickly with `k`, which is why distances above
//! [`MAX_EDIT_DISTANCE`] are refused.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use log::debug;

use super::dfa::{Dfa, StateId};
use crate::error::{Error, Result};

/// Largest edit distance the automaton builder accepts.
pub const MAX_EDIT_DISTANCE: u32 = 8;

/// An NFA input label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// A concrete alphabet symbol.
    Exact(char),
    /// Matches any single symbol.
    Any,
    /// Taken without reading input.
    Epsilon,
}

/// `position` symbols of the term matched, `edits` of the budget spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NfaState {
    pub position: usize,
    pub edits: u32,
}

impl NfaState {
    pub const fn new(position: usize, edits: u32) -> Self {
        Self { position, edits }
    }
}

/// An epsilon-closed set of NFA states. Ordered, so two equal sets compare
/// and hash equal regardless of how they were reached.
pub type StateSet = BTreeSet<NfaState>;

#[derive(Debug, Clone)]
pub struct Nfa {
    start: NfaState,
    transitions: HashMap<NfaState, BTreeMap<Symbol, BTreeSet<NfaState>>>,
    finals: HashSet<NfaState>,
}

impl Nfa {
    pub fn new(start: NfaState) -> Self {
        Self {
            start,
            transitions: HashMap::new(),
            finals: HashSet::new(),
        }
    }

    pub fn add_transition(&mut self, src: NfaState, input: Symbol, dest: NfaState) {
        self.transitions
            .entry(src)
            .or_default()
            .entry(input)
            .or_default()
            .insert(dest);
    }

    pub fn add_final_state(&mut self, state: NfaState) {
        self.finals.insert(state);
    }

    /// Epsilon-closure of the start state.
    pub fn start_states(&self) -> StateSet {
        self.expand(StateSet::from([self.start]))
    }

    pub fn is_final(&self, states: &StateSet) -> bool {
        states.iter().any(|state| self.finals.contains(state))
    }

    /// States reachable from `states` by reading `input`, epsilon-closed.
    ///
    /// An `Exact` symbol also follows `ANY` edges; `ANY` follows only `ANY`
    /// edges (it stands for "a symbol with no explicit edge").
    pub fn next_states(&self, states: &StateSet, input: Symbol) -> StateSet {
        let mut dest = StateSet::new();
        for state in states {
            let Some(edges) = self.transitions.get(state) else {
                continue;
            };
            if let Symbol::Exact(_) = input {
                if let Some(targets) = edges.get(&input) {
                    dest.extend(targets);
                }
            }
            if input != Symbol::Epsilon {
                if let Some(targets) = edges.get(&Symbol::Any) {
                    dest.extend(targets);
                }
            }
        }
        self.expand(dest)
    }

    /// Every label leaving any state in the set, in symbol order.
    fn inputs(&self, states: &StateSet) -> BTreeSet<Symbol> {
        states
            .iter()
            .filter_map(|state| self.transitions.get(state))
            .flat_map(|edges| edges.keys().copied())
            .collect()
    }

    fn expand(&self, mut states: StateSet) -> StateSet {
        let mut frontier: Vec<NfaState> = states.iter().copied().collect();
        while let Some(state) = frontier.pop() {
            let Some(targets) = self
                .transitions
                .get(&state)
                .and_then(|edges| edges.get(&Symbol::Epsilon))
            else {
                continue;
            };
            for &target in targets {
                if states.insert(target) {
                    frontier.push(target);
                }
            }
        }
        states
    }

    /// Subset construction.
    ///
    /// The empty set is never materialized: a symbol whose successor set is
    /// empty simply gets no edge, and a missing edge is a dead end.
    pub fn to_dfa(&self) -> Dfa {
        let start = self.start_states();
        let mut dfa = Dfa::with_start(self.is_final(&start));

        let mut ids: HashMap<StateSet, StateId> = HashMap::new();
        ids.insert(start.clone(), dfa.start());
        let mut frontier = vec![(start, dfa.start())];

        while let Some((current, current_id)) = frontier.pop() {
            for input in self.inputs(&current) {
                if input == Symbol::Epsilon {
                    continue;
                }
                let next = self.next_states(&current, input);
                if next.is_empty() {
                    continue;
                }

                let next_id = match ids.get(&next) {
                    Some(&id) => id,
                    None => {
                        let id = dfa.add_state(self.is_final(&next));
                        ids.insert(next.clone(), id);
                        frontier.push((next, id));
                        id
                    }
                };

                match input {
                    Symbol::Exact(c) => dfa.add_transition(current_id, c, next_id),
                    Symbol::Any => dfa.set_default_transition(current_id, next_id),
                    Symbol::Epsilon => {}
                }
            }
        }

        dfa
    }
}

/// The NFA accepting every string within `max_distance` edits of `term`.
pub fn levenshtein_nfa(term: &str, max_distance: u32) -> Nfa {
    let k = max_distance;
    let mut nfa = Nfa::new(NfaState::new(0, 0));
    let mut len = 0;

    for (i, c) in term.chars().enumerate() {
        for e in 0..=k {
            nfa.add_transition(NfaState::new(i, e), Symbol::Exact(c), NfaState::new(i + 1, e));
            if e < k {
                // Extra symbol in the candidate
                nfa.add_transition(NfaState::new(i, e), Symbol::Any, NfaState::new(i, e + 1));
                // Term symbol missing from the candidate
                nfa.add_transition(
                    NfaState::new(i, e),
                    Symbol::Epsilon,
                    NfaState::new(i + 1, e + 1),
                );
                // Different symbol in its place
                nfa.add_transition(NfaState::new(i, e), Symbol::Any, NfaState::new(i + 1, e + 1));
            }
        }
        len = i + 1;
    }

    for e in 0..=k {
        if e < k {
            nfa.add_transition(NfaState::new(len, e), Symbol::Any, NfaState::new(len, e + 1));
        }
        nfa.add_final_state(NfaState::new(len, e));
    }

    nfa
}

/// Deterministic automaton for `term` at `max_distance`, ready for skip search.
pub fn levenshtein_dfa(term: &str, max_distance: u32) -> Result<Dfa> {
    if max_distance > MAX_EDIT_DISTANCE {
        return Err(Error::EditDistanceTooLarge {
            requested: max_distance,
            max: MAX_EDIT_DISTANCE,
        });
    }

    let dfa = levenshtein_nfa(term, max_distance).to_dfa();
    debug!(
        "levenshtein dfa for {:?} (k={}): {} states",
        term,
        max_distance,
        dfa.num_states()
    );
    Ok(dfa)
}

/// Validate an edit distance that arrived as a signed integer.
///
/// ```
/// use skipdict::checked_edit_distance;
///
/// assert_eq!(checked_edit_distance(2).unwrap(), 2);
/// assert!(checked_edit_distance(-1).is_err());
/// ```
pub fn checked_edit_distance(requested: i64) -> Result<u32> {
    if requested < 0 {
        return Err(Error::NegativeEditDistance { requested });
    }
    match u32::try_from(requested) {
        Ok(k) if k <= MAX_EDIT_DISTANCE => Ok(k),
        _ => Err(Error::EditDistanceTooLarge {
            requested: u32::try_from(requested).unwrap_or(u32::MAX),
            max: MAX_EDIT_DISTANCE,
        }),
    }
}
