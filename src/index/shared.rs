// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A process-wide slot for the active index.
//!
//! Dictionaries usually want one index per vocabulary (say, one for Cree
//! lemmas and one for English keywords) built at startup and shared by every
//! request. `SharedIndex` is that slot: `const`-constructible so it can sit in
//! a `static`, built at most once even when the first lookups race, and
//! replaceable wholesale when the vocabulary changes.
//!
//! Readers get an `Arc` snapshot. A swap never disturbs a reader already
//! holding the previous snapshot; it just finishes its query on the old index.
//!
//! ```
//! use skipdict::{AffixIndex, SharedIndex};
//!
//! static LEMMAS: SharedIndex = SharedIndex::new();
//!
//! let index = LEMMAS
//!     .get_or_try_init(|| AffixIndex::build([("nipâw", 1), ("nipiy", 2)]))
//!     .unwrap();
//! assert_eq!(index.search_by_prefix("nip").len(), 2);
//! ```

use std::sync::Arc;

use log::info;
use parking_lot::{const_rwlock, RwLock};

use super::affix::AffixIndex;
use crate::error::Result;

pub struct SharedIndex {
    slot: RwLock<Option<Arc<AffixIndex>>>,
}

impl SharedIndex {
    pub const fn new() -> Self {
        Self {
            slot: const_rwlock(None),
        }
    }

    /// The current snapshot, if one has been installed.
    pub fn get(&self) -> Option<Arc<AffixIndex>> {
        self.slot.read().clone()
    }

    /// The current snapshot, building it with `build` on first use.
    ///
    /// Concurrent first callers serialize on the write lock; only the first
    /// runs `build`, the rest see its result. A failed build leaves the slot
    /// empty so a later call can retry.
    pub fn get_or_try_init<F>(&self, build: F) -> Result<Arc<AffixIndex>>
    where
        F: FnOnce() -> Result<AffixIndex>,
    {
        if let Some(index) = self.get() {
            return Ok(index);
        }

        let mut slot = self.slot.write();
        if let Some(index) = slot.as_ref() {
            return Ok(Arc::clone(index));
        }

        let index = Arc::new(build()?);
        info!("installed affix index with {} keys", index.len());
        *slot = Some(Arc::clone(&index));
        Ok(index)
    }

    /// Install a rebuilt index, returning the one it replaces.
    pub fn replace(&self, index: AffixIndex) -> Option<Arc<AffixIndex>> {
        let index = Arc::new(index);
        info!("swapping in affix index with {} keys", index.len());
        self.slot.write().replace(index)
    }

    /// Drop the installed index. Readers holding a snapshot keep it.
    pub fn clear(&self) -> Option<Arc<AffixIndex>> {
        self.slot.write().take()
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.read().is_some()
    }
}

impl Default for SharedIndex {
    fn default() -> Self {
        Self::new()
    }
}
