// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Skip search: enumerate every vocabulary word within k edits without
//! looking at the ones that aren't.
//!
//! Two sorted sequences are merged against each other: the (infinite) list of
//! strings the Levenshtein DFA accepts, and the (finite) sorted vocabulary.
//! Each side can answer "what is your smallest element `>= x`?" cheaply, so
//! the merge ping-pongs between them:
//!
//! ```text
//! probe     = dfa.next_valid_string("")
//! candidate = vocab.smallest_at_least(probe)
//!   candidate == probe  → match; probe = dfa.next_valid_string(candidate + "\0")
//!   candidate >  probe  → probe = dfa.next_valid_string(candidate)
//! ```
//!
//! Every step moves one side strictly forward, and each step costs one DFA
//! walk plus one binary search. The number of steps is bounded by matches
//! plus the gaps between them, not by vocabulary size.
//!
//! # Candidate sources
//!
//! Anything that can answer "smallest entry `>= probe`" works: the in-memory
//! [`SortedVocabulary`], an `fst::Set` (range seek), a sorted slice, or an
//! arbitrary lookup function wrapped in [`LookupFn`] for vocabularies that
//! live elsewhere (a database index, say).

use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};

use fst::{IntoStreamer, Streamer};
use log::trace;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::dfa::Dfa;
use super::nfa::levenshtein_dfa;
use crate::error::Result;

/// A sorted vocabulary that can seek to the first entry `>= probe`.
pub trait CandidateSource {
    fn smallest_at_least(&self, probe: &str) -> Option<Cow<'_, str>>;
}

/// Sorted, deduplicated word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedVocabulary {
    words: Vec<String>,
}

impl SortedVocabulary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SortedVocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl CandidateSource for SortedVocabulary {
    fn smallest_at_least(&self, probe: &str) -> Option<Cow<'_, str>> {
        self.words.as_slice().smallest_at_least(probe)
    }
}

/// The slice must already be sorted.
impl CandidateSource for [String] {
    fn smallest_at_least(&self, probe: &str) -> Option<Cow<'_, str>> {
        let pos = self.partition_point(|word| word.as_str() < probe);
        self.get(pos).map(|word| Cow::Borrowed(word.as_str()))
    }
}

impl<D: AsRef<[u8]>> CandidateSource for fst::Set<D> {
    fn smallest_at_least(&self, probe: &str) -> Option<Cow<'_, str>> {
        let mut stream = self.range().ge(probe).into_stream();
        let key = stream.next()?;
        Some(Cow::Owned(String::from_utf8_lossy(key).into_owned()))
    }
}

/// Adapts a lookup function returning the first word `>= probe`.
pub struct LookupFn<F>(pub F);

impl<F> CandidateSource for LookupFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn smallest_at_least(&self, probe: &str) -> Option<Cow<'_, str>> {
        (self.0)(probe).map(Cow::Owned)
    }
}

/// Every entry of `source` within `max_distance` edits of `term`, in
/// ascending order. Lazy: abandon it whenever you like.
///
/// ```
/// use skipdict::{find_all_matches, SortedVocabulary};
///
/// let words = SortedVocabulary::new(["banana", "banann", "banne", "canana"]);
/// let found: Vec<String> = find_all_matches("banana", 1, &words).unwrap().collect();
/// assert_eq!(found, ["banana", "banann", "canana"]);
/// ```
pub fn find_all_matches<'s, S>(
    term: &str,
    max_distance: u32,
    source: &'s S,
) -> Result<FuzzyMatches<'s, S>>
where
    S: CandidateSource + ?Sized,
{
    let dfa = levenshtein_dfa(term, max_distance)?;
    Ok(FuzzyMatches::new(dfa, source, None))
}

/// Iterator returned by [`find_all_matches`].
pub struct FuzzyMatches<'s, S: ?Sized> {
    dfa: Dfa,
    source: &'s S,
    probe: Option<String>,
    probes: usize,
    shared_probes: Option<&'s AtomicUsize>,
}

impl<'s, S: CandidateSource + ?Sized> FuzzyMatches<'s, S> {
    fn new(dfa: Dfa, source: &'s S, shared_probes: Option<&'s AtomicUsize>) -> Self {
        let probe = dfa.next_valid_string("");
        Self {
            dfa,
            source,
            probe,
            probes: 0,
            shared_probes,
        }
    }

    /// Candidate lookups performed so far.
    pub fn probes(&self) -> usize {
        self.probes
    }

    fn count_probe(&mut self) {
        self.probes += 1;
        if let Some(shared) = self.shared_probes {
            shared.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl<S: CandidateSource + ?Sized> Iterator for FuzzyMatches<'_, S> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let probe = self.probe.take()?;
            self.count_probe();
            let source = self.source;
            let candidate = source.smallest_at_least(&probe)?;

            if candidate.as_ref() == probe.as_str() {
                let mut past = candidate.into_owned();
                past.push('\0');
                self.probe = self.dfa.next_valid_string(&past);
                past.pop();
                trace!("skip search: matched {:?}", past);
                return Some(past);
            }

            trace!("skip search: probe {:?} landed on {:?}", probe, candidate);
            self.probe = self.dfa.next_valid_string(&candidate);
        }
    }
}

/// A word list prepared for repeated fuzzy lookups.
///
/// Keeps a running count of candidate lookups across all queries, handy for
/// checking that skip search really does skip.
#[derive(Debug, Default)]
pub struct Matcher {
    words: SortedVocabulary,
    probes: AtomicUsize,
}

impl Matcher {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: SortedVocabulary::new(words),
            probes: AtomicUsize::new(0),
        }
    }

    pub fn vocabulary(&self) -> &SortedVocabulary {
        &self.words
    }

    /// Total candidate lookups made by every query so far.
    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::Relaxed)
    }

    pub fn find_all_matches(
        &self,
        term: &str,
        max_distance: u32,
    ) -> Result<FuzzyMatches<'_, SortedVocabulary>> {
        let dfa = levenshtein_dfa(term, max_distance)?;
        Ok(FuzzyMatches::new(dfa, &self.words, Some(&self.probes)))
    }

    /// Run independent queries in parallel.
    #[cfg(feature = "parallel")]
    pub fn find_all_matches_batch(
        &self,
        terms: &[&str],
        max_distance: u32,
    ) -> Vec<Result<Vec<String>>> {
        terms
            .par_iter()
            .map(|term| -> Result<Vec<String>> {
                Ok(self.find_all_matches(term, max_distance)?.collect())
            })
            .collect()
    }

    /// Run independent queries one after another.
    #[cfg(not(feature = "parallel"))]
    pub fn find_all_matches_batch(
        &self,
        terms: &[&str],
        max_distance: u32,
    ) -> Vec<Result<Vec<String>>> {
        terms
            .iter()
            .map(|term| -> Result<Vec<String>> {
                Ok(self.find_all_matches(term, max_distance)?.collect())
            })
            .collect()
    }
}
