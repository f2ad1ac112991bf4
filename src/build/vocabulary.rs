// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading `(text, id)` pairs from vocabulary files.
//!
//! Two formats, picked by extension:
//!
//! ```text
//! # words.tsv: one entry per line, text<TAB>id
//! wâpamêw	1
//! nipâw	2
//! ```
//!
//! ```json
//! [{"text": "wâpamêw", "id": 1}, {"text": "nipâw", "id": 2}]
//! ```
//!
//! Blank lines and `#` comments are skipped in TSV. Anything else that is not
//! `text<TAB>id` is an error naming the line, so a truncated export does not
//! silently produce a smaller index.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::index::WordformId;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub text: String,
    pub id: WordformId,
}

impl From<VocabularyEntry> for (String, WordformId) {
    fn from(entry: VocabularyEntry) -> Self {
        (entry.text, entry.id)
    }
}

/// Parse tab-separated `text<TAB>id` lines.
pub fn read_tsv<R: BufRead>(reader: R) -> Result<Vec<(String, WordformId)>> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let trimmed = line.trim_end_matches('\r');
        if trimmed.trim().is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((text, id)) = trimmed.rsplit_once('\t') else {
            return Err(Error::VocabularyLine {
                line: line_number,
                reason: "expected text<TAB>id".to_string(),
            });
        };
        let id = id.trim().parse::<WordformId>().map_err(|e| Error::VocabularyLine {
            line: line_number,
            reason: format!("invalid id {:?}: {}", id, e),
        })?;
        entries.push((text.to_string(), id));
    }

    Ok(entries)
}

/// Parse a JSON array of `{"text": ..., "id": ...}` objects.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<(String, WordformId)>> {
    let entries: Vec<VocabularyEntry> = serde_json::from_reader(reader)?;
    Ok(entries.into_iter().map(Into::into).collect())
}

/// Load a vocabulary file, JSON if it ends in `.json`, TSV otherwise.
pub fn load_vocabulary(path: impl AsRef<Path>) -> Result<Vec<(String, WordformId)>> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        read_json(file)
    } else {
        read_tsv(file)
    }
}
