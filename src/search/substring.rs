// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Raw substring search: does the text contain any of these phrases?
//!
//! No tokenization. Terms may be multi-word phrases and match anywhere,
//! including inside words.

/// Lowercase and trim phrases, dropping empty ones.
pub fn normalize_phrases<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    terms
        .iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// True if the lowercased text contains any of the (lowercase) phrases.
pub fn contains_any(text: &str, phrases: &[String]) -> bool {
    let lowered = text.to_lowercase();
    phrases.iter().any(|p| lowered.contains(p.as_str()))
}
