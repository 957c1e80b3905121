// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix autocomplete over the n-gram vocabulary.
//!
//! Every 1..=3-gram is a candidate suggestion, spelled as its tokens joined
//! with single spaces. A prefix matches on the joined string, so `"net p"`
//! reaches `"net profit"`. Suggestions with any stopword among their words are
//! dropped.

use crate::index::NGramTable;
use crate::util::stopwords::contains_stop_word;
use serde::Serialize;
use std::collections::HashSet;

/// A suggestion with its global n-gram count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub frequency: u64,
}

/// All stopword-free n-grams starting with `prefix`.
///
/// The result is a set; it is returned sorted alphabetically so repeated calls
/// print identically.
pub fn autocomplete(ngrams: &NGramTable, prefix: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    let suggestions: HashSet<String> = ngrams
        .iter()
        .map(|(key, _)| key.join(" "))
        .filter(|joined| joined.starts_with(&prefix) && !contains_stop_word(joined))
        .collect();

    let mut suggestions: Vec<String> = suggestions.into_iter().collect();
    suggestions.sort_unstable();
    suggestions
}

/// Like `autocomplete`, ordered by frequency (descending, then text).
///
/// `limit` truncates after sorting.
pub fn autocomplete_ranked(ngrams: &NGramTable, prefix: &str, limit: Option<usize>) -> Vec<Suggestion> {
    let prefix = prefix.to_lowercase();
    let mut suggestions: Vec<Suggestion> = ngrams
        .iter()
        .map(|(key, frequency)| Suggestion {
            text: key.join(" "),
            frequency,
        })
        .filter(|s| s.text.starts_with(&prefix) && !contains_stop_word(&s.text))
        .collect();

    suggestions.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.text.cmp(&b.text)));
    if let Some(limit) = limit {
        suggestions.truncate(limit);
    }
    suggestions
}
