//! Tests for skip search over the different candidate sources.

use std::collections::BTreeSet;

use super::common::{
    banana_vocabulary, brute_force_matches, synthetic_vocabulary, BANANAS, BANANA_MATCHES,
};
use skipdict::{find_all_matches, LookupFn, Matcher, SortedVocabulary};

#[test]
fn test_banana_scenario() {
    let vocab = banana_vocabulary();
    let found: Vec<String> = find_all_matches("banana", 1, &vocab).unwrap().collect();
    assert_eq!(found, BANANA_MATCHES);
}

#[test]
fn test_banana_scenario_at_distance_two() {
    let vocab = banana_vocabulary();
    let found: Vec<String> = find_all_matches("banana", 2, &vocab).unwrap().collect();
    assert_eq!(found, brute_force_matches("banana", 2, vocab.iter()));
    assert!(found.contains(&"bbbnana".to_string()));
    assert!(found.contains(&"xbananax".to_string()));
    assert!(found.contains(&"banne".to_string()));
}

#[test]
fn test_zero_distance_is_exact_lookup() {
    let vocab = banana_vocabulary();
    let found: Vec<String> = find_all_matches("canana", 0, &vocab).unwrap().collect();
    assert_eq!(found, ["canana"]);

    let found: Vec<String> = find_all_matches("cananas", 0, &vocab).unwrap().collect();
    assert!(found.is_empty());
}

#[test]
fn test_empty_vocabulary_yields_nothing() {
    let vocab = SortedVocabulary::default();
    assert_eq!(find_all_matches("banana", 3, &vocab).unwrap().count(), 0);
}

#[test]
fn test_empty_term_matches_short_entries() {
    let vocab = SortedVocabulary::new(["", "a", "ab", "abc", "b"]);
    let found: Vec<String> = find_all_matches("", 0, &vocab).unwrap().collect();
    assert_eq!(found, [""]);

    let found: Vec<String> = find_all_matches("", 1, &vocab).unwrap().collect();
    assert_eq!(found, ["", "a", "b"]);
}

#[test]
fn test_results_are_ascending_and_distinct() {
    let vocab = SortedVocabulary::new(["kita", "kite", "kit", "kite", "kitten", "bit"]);
    let found: Vec<String> = find_all_matches("kit", 1, &vocab).unwrap().collect();
    let sorted: BTreeSet<&String> = found.iter().collect();
    assert_eq!(sorted.len(), found.len());
    assert_eq!(found, ["bit", "kit", "kita", "kite"]);
}

#[test]
fn test_lookup_function_source() {
    let words: Vec<String> = BANANAS.iter().map(|w| w.to_string()).collect();
    let mut sorted = words.clone();
    sorted.sort();

    let lookup = LookupFn(|probe: &str| sorted.iter().find(|w| w.as_str() >= probe).cloned());
    let found: Vec<String> = find_all_matches("banana", 1, &lookup).unwrap().collect();
    assert_eq!(found, BANANA_MATCHES);
}

#[test]
fn test_sorted_slice_source() {
    let mut words: Vec<String> = BANANAS.iter().map(|w| w.to_string()).collect();
    words.sort();
    let found: Vec<String> = find_all_matches("banana", 1, words.as_slice()).unwrap().collect();
    assert_eq!(found, BANANA_MATCHES);
}

#[test]
fn test_fst_set_source() {
    let mut words: Vec<&str> = BANANAS.to_vec();
    words.sort_unstable();
    let set = fst::Set::from_iter(words).unwrap();
    let found: Vec<String> = find_all_matches("banana", 1, &set).unwrap().collect();
    assert_eq!(found, BANANA_MATCHES);
}

#[test]
fn test_iterator_can_be_abandoned() {
    let vocab = banana_vocabulary();
    let mut matches = find_all_matches("banana", 1, &vocab).unwrap();
    assert_eq!(matches.next().as_deref(), Some("banana"));
    assert!(matches.probes() >= 1);
    drop(matches);
}

#[test]
fn test_selective_query_skips_most_of_a_large_vocabulary() {
    let words = synthetic_vocabulary(5_000);
    let matcher = Matcher::new(words.iter().cloned());
    let term = words[1234].clone();

    let mut matches = matcher.find_all_matches(&term, 1).unwrap();
    let found: Vec<String> = matches.by_ref().collect();
    assert!(found.contains(&term));
    assert!(
        matches.probes() < words.len() / 10,
        "{} probes for {} words",
        matches.probes(),
        words.len()
    );
    assert_eq!(matcher.probes(), matches.probes());
}

#[test]
fn test_matcher_batch() {
    let matcher = Matcher::new(BANANAS);
    let results = matcher.find_all_matches_batch(&["banana", "banne", "zzz"], 1);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap(), &BANANA_MATCHES);
    assert!(results[1].as_ref().unwrap().contains(&"banne".to_string()));
    assert!(results[2].as_ref().unwrap().is_empty());
}
