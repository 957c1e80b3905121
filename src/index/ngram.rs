// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! N-gram frequency table.
//!
//! For a token sequence of length L the accumulator emits L unigrams, L-1
//! bigrams and L-2 trigrams. Counts are global: the same bigram in two
//! documents counts twice. Autocomplete reads the keys; the counts only
//! matter for the ranked variant.

use std::collections::HashMap;

/// Longest n-gram recorded.
pub const MAX_NGRAM: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct NGramTable {
    counts: HashMap<Vec<String>, u64>,
}

impl NGramTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every 1..=3-gram of `tokens` to the table.
    pub fn accumulate(&mut self, tokens: &[String]) {
        for n in 1..=MAX_NGRAM {
            for window in tokens.windows(n) {
                *self.counts.entry(window.to_vec()).or_insert(0) += 1;
            }
        }
    }

    /// Global count for an n-gram, 0 if never seen.
    pub fn count(&self, words: &[&str]) -> u64 {
        let key: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
        self.counts.get(&key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct n-grams per order: `[unigrams, bigrams, trigrams]`.
    pub fn len_by_order(&self) -> [usize; MAX_NGRAM] {
        let mut lens = [0; MAX_NGRAM];
        for key in self.counts.keys() {
            lens[key.len() - 1] += 1;
        }
        lens
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[String], u64)> {
        self.counts.iter().map(|(k, c)| (k.as_slice(), *c))
    }
}
