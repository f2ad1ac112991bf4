// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build-side helpers: getting a vocabulary off disk and into an index.

pub mod vocabulary;

use std::path::Path;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::index::AffixIndex;

pub use vocabulary::*;

/// Load a vocabulary file and index it with the configured normalizer.
pub fn build_from_path(path: impl AsRef<Path>, config: &SearchConfig) -> Result<AffixIndex> {
    let entries = load_vocabulary(path)?;
    AffixIndex::from_config(entries, config)
}
