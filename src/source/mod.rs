// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document sources: where document names and their text come from.
//!
//! The engine never reads files itself. It asks a `DocumentSource` for the
//! current listing and for each document's text. Listings may change between
//! calls, and extraction may fail for any single document without affecting
//! the others.

mod directory;

pub use directory::DirectorySource;

use crate::error::SourceError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Supplies document names and text to the engine.
pub trait DocumentSource: Send + Sync {
    /// Current document identifiers, in the source's preferred order.
    fn list_documents(&self) -> Result<Vec<String>, SourceError>;

    /// Full plain text of one document.
    fn extract_text(&self, document: &str) -> Result<String, SourceError>;

    fn contains(&self, document: &str) -> Result<bool, SourceError> {
        Ok(self.list_documents()?.iter().any(|d| d == document))
    }
}

/// Runs extractions with an optional time limit.
///
/// With a timeout each extraction runs on its own thread. A source that hangs
/// leaves that thread behind and the caller moves on with
/// `SourceError::Timeout`. While a document's worker is still running past the
/// timeout, further requests for that document fail at once instead of
/// spawning another worker, so a hung document holds at most one thread.
pub struct Extractor {
    timeout: Option<Duration>,
    workers: Arc<Mutex<Workers>>,
}

#[derive(Default)]
struct Workers {
    next_id: u64,
    running: HashMap<String, Vec<(u64, Instant)>>,
}

impl Workers {
    fn start(&mut self, document: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.running
            .entry(document.to_string())
            .or_default()
            .push((id, Instant::now()));
        id
    }

    fn finish(&mut self, document: &str, id: u64) {
        if let Some(workers) = self.running.get_mut(document) {
            workers.retain(|(worker, _)| *worker != id);
            if workers.is_empty() {
                self.running.remove(document);
            }
        }
    }

    fn stalled(&self, document: &str, timeout: Duration) -> bool {
        self.running
            .get(document)
            .is_some_and(|workers| workers.iter().any(|(_, started)| started.elapsed() >= timeout))
    }
}

impl Extractor {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            workers: Arc::new(Mutex::new(Workers::default())),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Extraction threads that have not returned yet, including hung ones.
    pub fn pending(&self) -> usize {
        self.workers.lock().running.values().map(Vec::len).sum()
    }

    /// Extract a document's text, giving up after the timeout.
    pub fn extract<S>(&self, source: &Arc<S>, document: &str) -> Result<String, SourceError>
    where
        S: DocumentSource + ?Sized + 'static,
    {
        let Some(timeout) = self.timeout else {
            return source.extract_text(document);
        };

        let id = {
            let mut workers = self.workers.lock();
            if workers.stalled(document, timeout) {
                return Err(SourceError::Timeout {
                    document: document.to_string(),
                    timeout,
                });
            }
            workers.start(document)
        };

        let (tx, rx) = mpsc::channel();
        let worker_source = Arc::clone(source);
        let worker_document = document.to_string();
        let registry = Arc::clone(&self.workers);
        let spawned = thread::Builder::new()
            .name("owleye-extract".to_string())
            .spawn(move || {
                let result = worker_source.extract_text(&worker_document);
                registry.lock().finish(&worker_document, id);
                // Receiver may already be gone after a timeout
                let _ = tx.send(result);
            });
        if let Err(e) = spawned {
            self.workers.lock().finish(document, id);
            return Err(SourceError::Unavailable(document.to_string(), e.to_string()));
        }

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(SourceError::Timeout {
                document: document.to_string(),
                timeout,
            }),
            Err(RecvTimeoutError::Disconnected) => Err(SourceError::Unavailable(
                document.to_string(),
                "extraction thread exited without a result".to_string(),
            )),
        }
    }
}
