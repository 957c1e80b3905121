// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Conjunctive exact search: every query term must be a token of the document.
//!
//! This path does not read the inverted index. It tokenizes the document's
//! current text and checks membership of each query term, so it always
//! reflects what the source returns right now.
//!
//! Repeated query terms are separate requirements. `"term term"` needs two
//! matches, and a document containing `term` once satisfies both, because each
//! requirement is a membership test.

use super::context::{extract_context, ContextOptions, ContextSnippet};
use super::utils::match_percentage;
use crate::util::tokenize::tokenize;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub document: String,
    /// Always 100 for conjunctive results.
    pub match_percentage: f64,
    pub matches: Vec<ContextSnippet>,
}

/// Count query terms (repeats included) that occur among `tokens`.
pub fn count_matched_terms(tokens: &[String], terms: &[String]) -> usize {
    let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    terms.iter().filter(|t| present.contains(t.as_str())).count()
}

/// Evaluate one document against the query terms.
///
/// Returns `None` unless every term matched.
pub fn evaluate_document(
    document: &str,
    text: &str,
    terms: &[String],
    options: &ContextOptions,
) -> Option<SearchResult> {
    if terms.is_empty() {
        return None;
    }

    let matched = count_matched_terms(&tokenize(text), terms);
    if matched != terms.len() {
        return None;
    }

    Some(SearchResult {
        document: document.to_string(),
        match_percentage: match_percentage(matched, terms.len()),
        matches: extract_context(text, terms, options),
    })
}

/// Sort by descending percentage. Stable, so ties keep discovery order.
pub fn rank_results(results: &mut [SearchResult]) {
    results.sort_by(|a, b| {
        b.match_percentage
            .partial_cmp(&a.match_percentage)
            .unwrap_or(Ordering::Equal)
    });
}
