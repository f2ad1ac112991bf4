//! Property tests for skip search against a linear scan.

use proptest::prelude::*;
use skipdict::{find_all_matches, Matcher};

use super::common::{brute_force_matches, small_alphabet_word, small_vocabulary, vocabulary};

proptest! {
    /// Skip search finds exactly what checking every word finds.
    #[test]
    fn prop_matches_equal_brute_force(
        words in small_vocabulary(),
        term in small_alphabet_word(),
        k in 0u32..=2,
    ) {
        let vocab = vocabulary(&words);
        let found: Vec<String> = find_all_matches(&term, k, &vocab).unwrap().collect();
        let expected = brute_force_matches(&term, k, words.iter().map(String::as_str));
        prop_assert_eq!(found, expected);
    }

    /// Running the same query twice gives the same answer.
    #[test]
    fn prop_search_is_idempotent(
        words in small_vocabulary(),
        term in small_alphabet_word(),
        k in 0u32..=2,
    ) {
        let matcher = Matcher::new(words);
        let first: Vec<String> = matcher.find_all_matches(&term, k).unwrap().collect();
        let second: Vec<String> = matcher.find_all_matches(&term, k).unwrap().collect();
        prop_assert_eq!(first, second);
    }

    /// Every match at k is still a match at k + 1.
    #[test]
    fn prop_matches_monotone_in_k(
        words in small_vocabulary(),
        term in small_alphabet_word(),
        k in 0u32..=2,
    ) {
        let vocab = vocabulary(&words);
        let narrow: Vec<String> = find_all_matches(&term, k, &vocab).unwrap().collect();
        let wide: Vec<String> = find_all_matches(&term, k + 1, &vocab).unwrap().collect();
        for word in &narrow {
            prop_assert!(wide.contains(word), "{:?} lost going from k={} to k={}", word, k, k + 1);
        }
    }

    /// An fst set and an in-memory list agree.
    #[test]
    fn prop_fst_source_agrees_with_vocabulary(
        words in small_vocabulary(),
        term in small_alphabet_word(),
        k in 0u32..=2,
    ) {
        let vocab = vocabulary(&words);
        let set = fst::Set::from_iter(vocab.iter()).unwrap();
        let from_vocab: Vec<String> = find_all_matches(&term, k, &vocab).unwrap().collect();
        let from_fst: Vec<String> = find_all_matches(&term, k, &set).unwrap().collect();
        prop_assert_eq!(from_vocab, from_fst);
    }

    /// A member looked up at distance zero finds exactly itself.
    #[test]
    fn prop_exact_lookup_of_member(words in small_vocabulary(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!words.is_empty());
        let term = pick.get(&words).clone();
        let vocab = vocabulary(&words);
        let found: Vec<String> = find_all_matches(&term, 0, &vocab).unwrap().collect();
        prop_assert_eq!(found, vec![term]);
    }
}
