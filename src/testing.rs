// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides an in-memory document source with injectable failures.

#![doc(hidden)]

use crate::error::SourceError;
use crate::source::DocumentSource;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Entry {
    Text(String),
    Failing(String),
    Slow(String, Duration),
}

/// In-memory documents, listed in insertion order.
#[derive(Debug, Default)]
pub struct MemorySource {
    entries: RwLock<Vec<(String, Entry)>>,
    extractions: AtomicUsize,
    unlistable: AtomicBool,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let source = Self::new();
        for (name, text) in pairs {
            source.insert(name, text);
        }
        source
    }

    fn upsert(&self, name: &str, entry: Entry) {
        let mut entries = self.entries.write();
        match entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = entry,
            None => entries.push((name.to_string(), entry)),
        }
    }

    /// Add or replace a readable document.
    pub fn insert(&self, name: &str, text: &str) {
        self.upsert(name, Entry::Text(text.to_string()));
    }

    /// Add a document whose extraction always fails with `reason`.
    pub fn insert_failing(&self, name: &str, reason: &str) {
        self.upsert(name, Entry::Failing(reason.to_string()));
    }

    /// Add a document whose extraction sleeps for `delay` before returning.
    pub fn insert_slow(&self, name: &str, text: &str, delay: Duration) {
        self.upsert(name, Entry::Slow(text.to_string(), delay));
    }

    pub fn remove(&self, name: &str) {
        self.entries.write().retain(|(n, _)| n != name);
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Make `list_documents` fail until reset.
    pub fn set_unlistable(&self, unlistable: bool) {
        self.unlistable.store(unlistable, Ordering::SeqCst);
    }

    /// Number of `extract_text` calls so far.
    pub fn extraction_count(&self) -> usize {
        self.extractions.load(Ordering::SeqCst)
    }
}

impl DocumentSource for MemorySource {
    fn list_documents(&self) -> Result<Vec<String>, SourceError> {
        if self.unlistable.load(Ordering::SeqCst) {
            return Err(SourceError::Unavailable(
                "*".to_string(),
                "listing disabled".to_string(),
            ));
        }
        Ok(self.entries.read().iter().map(|(n, _)| n.clone()).collect())
    }

    fn extract_text(&self, document: &str) -> Result<String, SourceError> {
        self.extractions.fetch_add(1, Ordering::SeqCst);
        let entry = self
            .entries
            .read()
            .iter()
            .find(|(n, _)| n == document)
            .map(|(_, e)| e.clone());

        match entry {
            Some(Entry::Text(text)) => Ok(text),
            Some(Entry::Failing(reason)) => Err(SourceError::Unavailable(document.to_string(), reason)),
            Some(Entry::Slow(text, delay)) => {
                thread::sleep(delay);
                Ok(text)
            }
            None => Err(SourceError::Unavailable(
                document.to_string(),
                "no such document".to_string(),
            )),
        }
    }
}
