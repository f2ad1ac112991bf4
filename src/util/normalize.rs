// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Key normalization: turning raw dictionary forms into lookup keys.
//!
//! Every structure in the crate indexes *simplified* keys, never raw text. A
//! user typing "wapamew" should find "wâpamêw", and "Nipiy" should find
//! "nipiy". The policy that makes that happen is pluggable: the default folds
//! case and strips combining diacritics, which covers Cree SRO (`â ê î ô`,
//! `ā ē ī ō`) along with most Latin-script languages. A vocabulary in a
//! language with other needs can bring its own closure.
//!
//! # Algorithm (with unicode-normalization feature)
//!
//! 1. Lowercase
//! 2. NFD normalize (decompose characters into base + combining marks)
//! 3. Filter out combining marks
//! 4. Collapse whitespace
//!
//! # Algorithm (without unicode-normalization)
//!
//! 1. Lowercase only (assumes input is pre-normalized or ASCII)
//! 2. Collapse whitespace

use serde::{Deserialize, Serialize};

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// A policy mapping raw text to a simplified lookup key.
///
/// Must be pure and deterministic: the same raw text always yields the same
/// key, at build time and at query time. An empty result means "not
/// searchable" and keeps the entry out of the index.
///
/// Any `Fn(&str) -> String` closure is a normalizer:
///
/// ```
/// use skipdict::KeyNormalizer;
///
/// let upper = |raw: &str| raw.to_uppercase();
/// assert_eq!(upper.normalize("abc"), "ABC");
/// ```
pub trait KeyNormalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> String;
}

impl<F> KeyNormalizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn normalize(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Case folding plus diacritic stripping. The default policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiacriticFolding;

impl KeyNormalizer for DiacriticFolding {
    fn normalize(&self, raw: &str) -> String {
        normalize(raw)
    }
}

/// Case folding only. Diacritics are significant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lowercase;

impl KeyNormalizer for Lowercase {
    fn normalize(&self, raw: &str) -> String {
        collapse_whitespace(&raw.to_lowercase())
    }
}

/// Built-in policies, selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizationPolicy {
    #[default]
    DiacriticFolding,
    Lowercase,
}

impl NormalizationPolicy {
    pub fn normalizer(self) -> Box<dyn KeyNormalizer> {
        match self {
            NormalizationPolicy::DiacriticFolding => Box::new(DiacriticFolding),
            NormalizationPolicy::Lowercase => Box::new(Lowercase),
        }
    }
}

/// Normalize a string for lookup: lowercase, strip diacritics, and collapse whitespace.
///
/// - "wâpamêw" → "wapamew"
/// - "Nipâw" → "nipaw"
/// - "café" → "cafe"
/// - "  two   words " → "two words"
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    let folded: String = value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    collapse_whitespace(&folded)
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    collapse_whitespace(&value.to_lowercase())
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Examples: ́ (acute), ̂ (circumflex), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
