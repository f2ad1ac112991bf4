// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Affix index: prefix and suffix completion over simplified keys.
//!
//! Raw forms are normalized once at build time. The distinct keys go into two
//! `fst` sets (minimal acyclic automata, a.k.a. DAWGs): one over the keys as
//! written, one over the keys reversed. A suffix query is then just a prefix
//! query against the reversed set.
//!
//! # Data Structures
//!
//! | Structure     | Contents              | Query                 |
//! |---------------|-----------------------|-----------------------|
//! | `text_to_ids` | key → ids             | resolve matched keys  |
//! | `prefixes`    | keys                  | prefix, fuzzy seek    |
//! | `suffixes`    | reversed keys         | suffix                |
//!
//! The prefix set doubles as the sorted candidate source for fuzzy search:
//! an `fst` range seek is the "smallest key `>= probe`" lookup skip search
//! needs, so no second copy of the vocabulary is kept.
//!
//! # Duplicates
//!
//! Ids are appended in input order. Indexing the same `(text, id)` pair twice
//! yields that id twice under its key; callers that need unique ids dedup the
//! results themselves.

use std::collections::HashMap;
use std::fmt;

use fst::automaton::{Automaton, Str};
use fst::set::Stream as SetStream;
use fst::{IntoStreamer, Set, Streamer};
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::fuzzy::{find_all_matches, FuzzyMatches};
use crate::util::normalize::{DiacriticFolding, KeyNormalizer, NormalizationPolicy};

/// Identifier of a vocabulary entry, opaque to the index.
pub type WordformId = u64;

/// Prefix/suffix/fuzzy lookup over a frozen vocabulary snapshot.
pub struct AffixIndex {
    normalizer: Box<dyn KeyNormalizer>,
    text_to_ids: HashMap<String, Vec<WordformId>>,
    prefixes: Set<Vec<u8>>,
    suffixes: Set<Vec<u8>>,
}

impl AffixIndex {
    /// Build with the default normalizer (case folding + diacritic stripping).
    pub fn build<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, WordformId)>,
        S: AsRef<str>,
    {
        Self::assemble(words, Box::new(DiacriticFolding))
    }

    /// Build with a caller-supplied normalizer.
    ///
    /// ```
    /// use skipdict::AffixIndex;
    ///
    /// let index = AffixIndex::with_normalizer(
    ///     [("-pe-", 1), ("-sa-", 2)],
    ///     |raw: &str| raw.trim_matches('-').to_lowercase(),
    /// )
    /// .unwrap();
    /// assert_eq!(index.search_by_prefix("pe"), vec![1]);
    /// ```
    pub fn with_normalizer<I, S, N>(words: I, normalizer: N) -> Result<Self>
    where
        I: IntoIterator<Item = (S, WordformId)>,
        S: AsRef<str>,
        N: KeyNormalizer + 'static,
    {
        Self::assemble(words, Box::new(normalizer))
    }

    /// Build with one of the built-in normalization policies.
    pub fn with_policy<I, S>(words: I, policy: NormalizationPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (S, WordformId)>,
        S: AsRef<str>,
    {
        Self::assemble(words, policy.normalizer())
    }

    /// Build with the normalization policy named in `config`.
    pub fn from_config<I, S>(words: I, config: &SearchConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (S, WordformId)>,
        S: AsRef<str>,
    {
        Self::with_policy(words, config.normalization)
    }

    fn assemble<I, S>(words: I, normalizer: Box<dyn KeyNormalizer>) -> Result<Self>
    where
        I: IntoIterator<Item = (S, WordformId)>,
        S: AsRef<str>,
    {
        let mut text_to_ids: HashMap<String, Vec<WordformId>> = HashMap::new();
        let mut entries = 0usize;
        let mut skipped = 0usize;

        for (raw, id) in words {
            let key = normalizer.normalize(raw.as_ref());
            if key.is_empty() {
                skipped += 1;
                continue;
            }
            entries += 1;
            text_to_ids.entry(key).or_default().push(id);
        }

        let mut keys: Vec<String> = text_to_ids.keys().cloned().collect();
        sort_keys(&mut keys);
        let prefixes = Set::from_iter(&keys)?;

        let mut reversed: Vec<String> = keys.iter().map(|key| reverse(key)).collect();
        sort_keys(&mut reversed);
        let suffixes = Set::from_iter(&reversed)?;

        debug!(
            "affix index: {} entries under {} keys ({} skipped with empty keys)",
            entries,
            keys.len(),
            skipped
        );

        Ok(Self {
            normalizer,
            text_to_ids,
            prefixes,
            suffixes,
        })
    }

    /// The lookup key this index derives from `raw`.
    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.text_to_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text_to_ids.is_empty()
    }

    /// Serialized size of the prefix and suffix sets.
    pub fn fst_bytes(&self) -> usize {
        self.prefixes.as_fst().size() + self.suffixes.as_fst().size()
    }

    /// Distinct keys in ascending order.
    pub fn keys(&self) -> Vec<String> {
        drain(self.prefixes.stream())
    }

    /// Ids indexed under an already-normalized key.
    pub fn ids_for_key(&self, key: &str) -> &[WordformId] {
        self.text_to_ids.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Keys starting with the normalized `query`, ascending.
    pub fn prefix_keys(&self, query: &str) -> Vec<String> {
        let term = self.normalizer.normalize(query);
        with_prefix(&self.prefixes, &term)
    }

    /// Keys ending with the normalized `query`, ordered by their reversal.
    pub fn suffix_keys(&self, query: &str) -> Vec<String> {
        let term = reverse(&self.normalizer.normalize(query));
        with_prefix(&self.suffixes, &term)
            .iter()
            .map(|reversed| reverse(reversed))
            .collect()
    }

    /// Ids of every entry whose key starts with the normalized `query`.
    pub fn search_by_prefix(&self, query: &str) -> Vec<WordformId> {
        self.resolve(self.prefix_keys(query))
    }

    /// Ids of every entry whose key ends with the normalized `query`.
    pub fn search_by_suffix(&self, query: &str) -> Vec<WordformId> {
        self.resolve(self.suffix_keys(query))
    }

    /// Keys within `max_distance` edits of the normalized `query`, lazily.
    pub fn fuzzy_keys(
        &self,
        query: &str,
        max_distance: u32,
    ) -> Result<FuzzyMatches<'_, Set<Vec<u8>>>> {
        let term = self.normalizer.normalize(query);
        find_all_matches(&term, max_distance, &self.prefixes)
    }

    /// Ids of every entry within `max_distance` edits of the normalized `query`.
    pub fn search_fuzzy(&self, query: &str, max_distance: u32) -> Result<Vec<WordformId>> {
        let keys: Vec<String> = self.fuzzy_keys(query, max_distance)?.collect();
        Ok(self.resolve(keys))
    }

    fn resolve<I>(&self, keys: I) -> Vec<WordformId>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut ids = Vec::new();
        for key in keys {
            ids.extend_from_slice(self.ids_for_key(key.as_ref()));
        }
        ids
    }
}

impl fmt::Debug for AffixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AffixIndex")
            .field("keys", &self.text_to_ids.len())
            .field("prefix_bytes", &self.prefixes.as_fst().size())
            .field("suffix_bytes", &self.suffixes.as_fst().size())
            .finish_non_exhaustive()
    }
}

fn with_prefix(set: &Set<Vec<u8>>, prefix: &str) -> Vec<String> {
    let matcher = Str::new(prefix).starts_with();
    drain(set.search(matcher).into_stream())
}

fn drain<A: Automaton>(mut stream: SetStream<'_, A>) -> Vec<String> {
    let mut keys = Vec::new();
    while let Some(key) = stream.next() {
        keys.push(String::from_utf8_lossy(key).into_owned());
    }
    keys
}

fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

#[cfg(feature = "parallel")]
fn sort_keys(keys: &mut [String]) {
    keys.par_sort_unstable();
}

#[cfg(not(feature = "parallel"))]
fn sort_keys(keys: &mut [String]) {
    keys.sort_unstable();
}
