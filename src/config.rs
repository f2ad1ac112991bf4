// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search settings a hosting application can load from JSON.
//!
//! Nothing in the core reads these on its own. The index is built with
//! whatever normalizer it is handed, and the matcher uses whatever distance
//! it is given. This struct exists so front ends (the CLI, a web service)
//! agree on defaults: fuzzy distance 1, and no affix or fuzzy search for
//! queries shorter than four characters, since short affixes match most of
//! the vocabulary.
//!
//! ```json
//! {
//!   "maxEditDistance": 2,
//!   "affixSearchThreshold": 4,
//!   "fuzzySearchThreshold": 3,
//!   "normalization": "diacritic-folding"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fuzzy::MAX_EDIT_DISTANCE;
use crate::util::normalize::{KeyNormalizer, NormalizationPolicy};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Edit distance used for fuzzy lookups.
    pub max_edit_distance: u32,
    /// Minimum query length (in characters) for prefix/suffix search.
    pub affix_search_threshold: usize,
    /// Minimum query length (in characters) for fuzzy search.
    pub fuzzy_search_threshold: usize,
    pub normalization: NormalizationPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_edit_distance: 1,
            affix_search_threshold: 4,
            fuzzy_search_threshold: 4,
            normalization: NormalizationPolicy::default(),
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_edit_distance > MAX_EDIT_DISTANCE {
            return Err(Error::EditDistanceTooLarge {
                requested: self.max_edit_distance,
                max: MAX_EDIT_DISTANCE,
            });
        }
        Ok(())
    }

    pub fn normalizer(&self) -> Box<dyn KeyNormalizer> {
        self.normalization.normalizer()
    }

    /// Is `query` long enough for prefix/suffix search?
    pub fn allows_affix_search(&self, query: &str) -> bool {
        query.chars().count() >= self.affix_search_threshold
    }

    /// Is `query` long enough for fuzzy search?
    pub fn allows_fuzzy_search(&self, query: &str) -> bool {
        query.chars().count() >= self.fuzzy_search_threshold
    }
}
