// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the immutable snapshot every read works against.
//!
//! A snapshot holds three structures built in one pass over the tokenized
//! documents:
//! - **Vocabulary**: every distinct token
//! - **N-gram table**: 1..=3-grams with global counts, for autocomplete
//! - **Inverted index**: token → documents, for union search
//!
//! Snapshots are never mutated after `IndexBuilder::finish`. A rebuild makes a
//! new one and the engine swaps the `Arc`.

mod inverted;
mod ngram;

pub use inverted::InvertedIndex;
pub use ngram::{NGramTable, MAX_NGRAM};

use crate::config::PostingMode;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct IndexSnapshot {
    documents: Vec<String>,
    vocabulary: HashSet<String>,
    ngrams: NGramTable,
    inverted: InvertedIndex,
}

impl IndexSnapshot {
    pub fn empty(mode: PostingMode) -> Self {
        Self {
            inverted: InvertedIndex::new(mode),
            ..Self::default()
        }
    }

    /// Documents that were indexed, in build order.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn vocabulary(&self) -> &HashSet<String> {
        &self.vocabulary
    }

    pub fn ngrams(&self) -> &NGramTable {
        &self.ngrams
    }

    pub fn inverted(&self) -> &InvertedIndex {
        &self.inverted
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty() && self.ngrams.is_empty() && self.inverted.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        let [unigrams, bigrams, trigrams] = self.ngrams.len_by_order();
        IndexStats {
            documents: self.documents.len(),
            vocabulary: self.vocabulary.len(),
            unigrams,
            bigrams,
            trigrams,
            postings: self.inverted.total_postings(),
        }
    }
}

/// Size summary of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub documents: usize,
    pub vocabulary: usize,
    pub unigrams: usize,
    pub bigrams: usize,
    pub trigrams: usize,
    pub postings: usize,
}

/// Accumulates tokenized documents into a fresh snapshot.
pub struct IndexBuilder {
    snapshot: IndexSnapshot,
}

impl IndexBuilder {
    pub fn new(mode: PostingMode) -> Self {
        Self {
            snapshot: IndexSnapshot::empty(mode),
        }
    }

    /// Index one document's token sequence.
    ///
    /// Updates the vocabulary, adds every n-gram to the table and records each
    /// unigram occurrence in the inverted index.
    pub fn add_document(&mut self, document: &str, tokens: &[String]) {
        let snapshot = &mut self.snapshot;
        snapshot.documents.push(document.to_string());
        snapshot.ngrams.accumulate(tokens);
        for token in tokens {
            if !snapshot.vocabulary.contains(token) {
                snapshot.vocabulary.insert(token.clone());
            }
            snapshot.inverted.record(token, document);
        }
    }

    pub fn finish(self) -> IndexSnapshot {
        self.snapshot
    }
}

/// Build a snapshot from `(document, tokens)` pairs in order.
pub fn build_snapshot<'a, I>(mode: PostingMode, documents: I) -> IndexSnapshot
where
    I: IntoIterator<Item = (&'a str, &'a [String])>,
{
    let mut builder = IndexBuilder::new(mode);
    for (document, tokens) in documents {
        builder.add_document(document, tokens);
    }
    builder.finish()
}
