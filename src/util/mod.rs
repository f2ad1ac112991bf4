// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Right now that means one thing: text normalization for accent-insensitive
//! lookup. It lives apart from the index because both halves of the crate
//! (affix completion and fuzzy matching) depend on it.

pub mod normalize;

pub use normalize::*;
