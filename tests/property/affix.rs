//! Property tests for the affix index.

use proptest::prelude::*;
use skipdict::WordformId;

use super::common::{index_with_positions, word};

fn vocabulary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 1..30)
}

proptest! {
    /// Every entry is found by prefix and by suffix search on its own text.
    #[test]
    fn prop_entries_round_trip(words in vocabulary()) {
        let index = index_with_positions(&words);
        for (id, text) in words.iter().enumerate() {
            let id = id as WordformId;
            prop_assert!(index.search_by_prefix(text).contains(&id));
            prop_assert!(index.search_by_suffix(text).contains(&id));
        }
    }

    /// Prefix search returns the ids of exactly the words with that prefix.
    #[test]
    fn prop_prefix_equals_filter(words in vocabulary(), prefix in "[a-z]{0,2}") {
        let index = index_with_positions(&words);
        let mut found = index.search_by_prefix(&prefix);
        found.sort_unstable();
        let expected: Vec<WordformId> = words
            .iter()
            .enumerate()
            .filter(|(_, w)| w.starts_with(prefix.as_str()))
            .map(|(i, _)| i as WordformId)
            .collect();
        prop_assert_eq!(found, expected);
    }

    /// Suffix search returns the ids of exactly the words with that suffix.
    #[test]
    fn prop_suffix_equals_filter(words in vocabulary(), suffix in "[a-z]{0,2}") {
        let index = index_with_positions(&words);
        let mut found = index.search_by_suffix(&suffix);
        found.sort_unstable();
        let expected: Vec<WordformId> = words
            .iter()
            .enumerate()
            .filter(|(_, w)| w.ends_with(suffix.as_str()))
            .map(|(i, _)| i as WordformId)
            .collect();
        prop_assert_eq!(found, expected);
    }

    /// Each id appears once per time it was indexed.
    #[test]
    fn prop_no_ids_invented_or_lost(words in vocabulary()) {
        let index = index_with_positions(&words);
        let mut all = index.search_by_prefix("");
        all.sort_unstable();
        let expected: Vec<WordformId> = (0..words.len() as WordformId).collect();
        prop_assert_eq!(all, expected);
    }
}
