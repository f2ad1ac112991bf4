//! Tests for loading vocabularies and configs from disk.

use std::io::Write;

use super::common::tsv_file;
use skipdict::{build_from_path, load_vocabulary, Error, NormalizationPolicy, SearchConfig};

#[test]
fn test_build_from_tsv() {
    let file = tsv_file(&[("wâpamêw", 1), ("wâpahtam", 2), ("nipâw", 3)]);
    let index = build_from_path(file.path(), &SearchConfig::default()).unwrap();
    assert_eq!(index.len(), 3);
    assert_eq!(index.search_by_suffix("taM"), vec![2]);
}

#[test]
fn test_build_from_json() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"[{{"text": "run", "id": 10}}, {{"text": "running", "id": 11}}]"#).unwrap();
    let index = build_from_path(file.path(), &SearchConfig::default()).unwrap();
    assert_eq!(index.search_by_prefix("runn"), vec![11]);
}

#[test]
fn test_malformed_json_is_reported() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"[{{"text": "run"}}]"#).unwrap();
    assert!(matches!(load_vocabulary(file.path()), Err(Error::Config(_))));
}

#[test]
fn test_bad_id_names_the_line() {
    let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
    writeln!(file, "# header\nrun\t10\njog\tthirteen").unwrap();
    match load_vocabulary(file.path()) {
        Err(Error::VocabularyLine { line, reason }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("thirteen"));
        }
        other => panic!("expected a vocabulary line error, got {:?}", other),
    }
}

#[test]
fn test_config_file_drives_normalization() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(config_file, r#"{{"normalization": "lowercase", "maxEditDistance": 2}}"#).unwrap();
    let config = SearchConfig::from_path(config_file.path()).unwrap();
    assert_eq!(config.normalization, NormalizationPolicy::Lowercase);

    let file = tsv_file(&[("Pîsim", 1), ("pisim", 2)]);
    let index = build_from_path(file.path(), &config).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.search_fuzzy("pîsim", config.max_edit_distance).unwrap().len(), 2);
}
