// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stopwords hidden from autocomplete suggestions.
//!
//! The list only affects autocomplete. Indexing, conjunctive search and union
//! search all see stopwords like any other token.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common words, plus "date", which shows up in nearly every contract.
pub const STOP_WORDS: &[&str] = &[
    "the", "on", "with", "for", "and", "of", "or", "as", "at", "in", "by", "to", "its", "from",
    "such", "this", "any", "date", "a", "is", "all", "that", "an", "above",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// True if any space-separated word of `phrase` is a stopword.
pub fn contains_stop_word(phrase: &str) -> bool {
    phrase.split(' ').any(is_stop_word)
}
