// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Union search over the inverted index: any term may match.
//!
//! Candidates are the union of the posting lists of every query term. A
//! candidate's percentage is the share of query terms (repeats included) whose
//! posting list contains it. Scoring is membership, so per-document and
//! per-occurrence posting modes rank identically.

use super::utils::match_percentage;
use crate::index::InvertedIndex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnionMatch {
    pub document: String,
    /// In (0, 100].
    pub match_percentage: f64,
}

/// Rank documents by the fraction of query terms they contain.
///
/// Sorted by descending percentage, then document name.
pub fn union_search(index: &InvertedIndex, terms: &[String]) -> Vec<UnionMatch> {
    let mut members: HashMap<&str, HashSet<&str>> = HashMap::new();
    for term in terms {
        if members.contains_key(term.as_str()) || !index.contains_term(term) {
            continue;
        }
        let docs = index.postings(term).iter().map(String::as_str).collect();
        members.insert(term.as_str(), docs);
    }

    let candidates: HashSet<&str> = members.values().flatten().copied().collect();

    let mut results: Vec<UnionMatch> = candidates
        .into_iter()
        .map(|document| {
            let matched = terms
                .iter()
                .filter(|t| members.get(t.as_str()).is_some_and(|docs| docs.contains(document)))
                .count();
            UnionMatch {
                document: document.to_string(),
                match_percentage: match_percentage(matched, terms.len()),
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.match_percentage
            .total_cmp(&a.match_percentage)
            .then_with(|| a.document.cmp(&b.document))
    });
    results
}
