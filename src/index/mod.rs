// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the structures that make lookup fast.
//!
//! - **Affix index**: prefix and suffix completion over normalized keys, plus
//!   the key → id map every search resolves through
//! - **Shared index**: the process-wide handle that owns the active snapshot

pub mod affix;
pub mod shared;

pub use affix::*;
pub use shared::*;
