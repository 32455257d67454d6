//! Text processing utilities.
//!
//! Provides word-set tokenization for the keyword matcher.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Regex for alphabetic tokens of length >= 3.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").expect("valid regex"));

/// Extract the deduplicated, lowercased word set from text.
///
/// Only alphabetic runs of three or more characters count as words; shorter
/// tokens and anything containing digits or punctuation are skipped. The
/// result is a [`BTreeSet`] so iteration order is lexicographic and stable.
pub fn word_set(text: &str) -> BTreeSet<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}
