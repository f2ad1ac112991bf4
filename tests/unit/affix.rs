//! Tests for prefix/suffix search and the key → id map.

use super::common::{make_index, running_index, CREE_WORDFORMS};
use skipdict::{AffixIndex, KeyNormalizer, NormalizationPolicy, SearchConfig, WordformId};

fn sorted(mut ids: Vec<WordformId>) -> Vec<WordformId> {
    ids.sort_unstable();
    ids
}

#[test]
fn test_prefix_scenario() {
    let index = running_index();
    assert_eq!(sorted(index.search_by_prefix("run")), vec![10, 11, 12]);
    assert_eq!(index.search_by_prefix("jog"), vec![13]);
}

#[test]
fn test_suffix_scenario() {
    let index = running_index();
    assert_eq!(sorted(index.search_by_suffix("ing")), vec![11]);
    assert_eq!(sorted(index.search_by_suffix("er")), vec![12]);
    assert!(index.search_by_suffix("nn").is_empty());
}

#[test]
fn test_whole_key_is_its_own_prefix_and_suffix() {
    let index = running_index();
    for key in index.keys() {
        let ids = index.ids_for_key(&key).to_vec();
        for id in &ids {
            assert!(index.search_by_prefix(&key).contains(id));
            assert!(index.search_by_suffix(&key).contains(id));
        }
    }
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_cree_wordforms_fold_diacritics() {
    let index = make_index(&CREE_WORDFORMS);
    assert_eq!(sorted(index.search_by_prefix("wap")), vec![1, 2]);
    assert_eq!(sorted(index.search_by_prefix("nipâ")), vec![3, 4]);
    assert_eq!(sorted(index.search_by_suffix("win")), vec![4]);
    assert_eq!(sorted(index.search_by_prefix("ATIM")), vec![5, 6]);
}

#[test]
fn test_prefix_keys_come_back_sorted() {
    let index = make_index(&CREE_WORDFORMS);
    let keys = index.prefix_keys("");
    let mut expected = keys.clone();
    expected.sort();
    assert_eq!(keys, expected);
    assert_eq!(keys.len(), CREE_WORDFORMS.len());
}

#[test]
fn test_custom_normalizer() {
    struct StripHyphens;
    impl KeyNormalizer for StripHyphens {
        fn normalize(&self, raw: &str) -> String {
            raw.chars().filter(|&c| c != '-').collect::<String>().to_lowercase()
        }
    }

    let index = AffixIndex::with_normalizer([("ê-nipât", 1), ("ê-pimohtêt", 2)], StripHyphens)
        .unwrap();
    assert_eq!(index.search_by_prefix("ênip"), vec![1]);
    assert_eq!(index.search_by_prefix("Ê-PIM"), vec![2]);
}

#[test]
fn test_policy_from_config() {
    let config = SearchConfig {
        normalization: NormalizationPolicy::Lowercase,
        ..SearchConfig::default()
    };
    let index = AffixIndex::from_config([("Mîcisow", 1), ("micisow", 2)], &config).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.search_by_prefix("mîci"), vec![1]);
    assert_eq!(index.search_by_prefix("MICI"), vec![2]);
}

#[test]
fn test_fuzzy_search_goes_through_the_normalizer() {
    let index = make_index(&[("minos", 1), ("minosak", 2), ("mistatim", 3)]);
    let keys: Vec<String> = index.fuzzy_keys("Minas", 1).unwrap().collect();
    assert_eq!(keys, ["minos"]);
    assert_eq!(index.search_fuzzy("MINOS", 0).unwrap(), vec![1]);
}

#[test]
fn test_duplicate_ids_are_preserved() {
    let index = make_index(&[("atim", 1), ("atim", 1), ("Atim", 2)]);
    assert_eq!(index.search_by_prefix("atim"), vec![1, 1, 2]);
}

#[test]
fn test_fst_bytes_reported() {
    let index = running_index();
    assert!(index.fst_bytes() > 0);
}
