// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index: token → posting list of document names.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NON_EMPTY**: Every token in the map has at least one posting
//! 2. **BUILD_ORDER**: Postings appear in the order documents were indexed
//! 3. **PER_DOCUMENT_UNIQUE**: In `PostingMode::PerDocument` a document appears
//!    at most once per posting list
//!
//! Documents are indexed one at a time, so a document's postings for a token are
//! always contiguous. Dedup in per-document mode only has to look at the last
//! entry.

use crate::config::PostingMode;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    mode: PostingMode,
    postings: HashMap<String, Vec<String>>,
}

impl InvertedIndex {
    pub fn new(mode: PostingMode) -> Self {
        Self {
            mode,
            postings: HashMap::new(),
        }
    }

    pub fn mode(&self) -> PostingMode {
        self.mode
    }

    /// Record one occurrence of `token` in `document`.
    pub fn record(&mut self, token: &str, document: &str) {
        let list = self.postings.entry(token.to_string()).or_default();
        if self.mode == PostingMode::PerDocument && list.last().is_some_and(|d| d == document) {
            return;
        }
        list.push(document.to_string());
    }

    /// Posting list for a token, empty if the token was never seen.
    pub fn postings(&self, token: &str) -> &[String] {
        self.postings.get(token).map_or(&[], Vec::as_slice)
    }

    pub fn contains_term(&self, token: &str) -> bool {
        self.postings.contains_key(token)
    }

    /// True if `document` appears in the posting list of `token`.
    pub fn contains(&self, token: &str, document: &str) -> bool {
        self.postings(token).iter().any(|d| d == document)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Sum of posting list lengths.
    pub fn total_postings(&self) -> usize {
        self.postings.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.postings.iter().map(|(t, l)| (t.as_str(), l.as_slice()))
    }
}
