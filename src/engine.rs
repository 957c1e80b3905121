// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: a document source plus the current index snapshot.
//!
//! # Snapshot model
//!
//! ```text
//!   build_index()                          readers
//!   ─────────────                          ───────
//!   lock rebuild mutex                     snapshot.read().clone()
//!   list + extract + tokenize              ↓
//!   IndexBuilder → new IndexSnapshot       Arc<IndexSnapshot> (immutable)
//!   snapshot.write() = Arc::new(new)
//! ```
//!
//! At most one rebuild runs at a time. Readers hold an `Arc` to whichever
//! snapshot was current when they started, so they never see a half-built
//! index. The write lock is held only for the pointer swap.
//!
//! # Skipped documents
//!
//! A document whose extraction fails or times out is skipped and logged at
//! `warn` with its name and reason. Builds also return the list in
//! `BuildReport::skipped`, so "unreadable" is never confused with "matched
//! nothing".

use crate::config::EngineConfig;
use crate::error::{EngineError, Result, SourceError};
use crate::index::{IndexBuilder, IndexSnapshot, IndexStats};
use crate::search::conjunctive::{evaluate_document, rank_results, SearchResult};
use crate::search::context::ContextOptions;
use crate::search::substring::{contains_any, normalize_phrases};
use crate::search::union::{union_search, UnionMatch};
use crate::search::utils::{paginate, parse_nonempty_query, Page};
use crate::search::{autocomplete, autocomplete_ranked, Suggestion};
use crate::source::{DocumentSource, Extractor};
use crate::util::tokenize::tokenize;
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A document left out of a build, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDocument {
    pub document: String,
    pub reason: String,
}

/// Outcome of one `build_index` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub stats: IndexStats,
    pub skipped: Vec<SkippedDocument>,
}

pub struct SearchEngine<S: DocumentSource + 'static> {
    source: Arc<S>,
    config: EngineConfig,
    snapshot: RwLock<Arc<IndexSnapshot>>,
    rebuild: Mutex<()>,
    extractor: Extractor,
}

impl<S: DocumentSource + 'static> SearchEngine<S> {
    /// Create an engine and build its first snapshot.
    pub fn open(source: S, config: EngineConfig) -> Result<Self> {
        Self::from_shared(Arc::new(source), config)
    }

    /// Like `open`, for a source the caller keeps a handle to.
    pub fn from_shared(source: Arc<S>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let engine = Self {
            snapshot: RwLock::new(Arc::new(IndexSnapshot::empty(config.posting_mode))),
            extractor: Extractor::new(config.extraction_timeout()),
            source,
            config,
            rebuild: Mutex::new(()),
        };
        engine.build_index()?;
        Ok(engine)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Extraction threads still running, including ones abandoned after a timeout.
    pub fn pending_extractions(&self) -> usize {
        self.extractor.pending()
    }

    /// The current snapshot. Stays valid even if a rebuild swaps in a new one.
    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        self.snapshot.read().clone()
    }

    pub fn stats(&self) -> IndexStats {
        self.snapshot().stats()
    }

    /// Current document listing from the source.
    pub fn documents(&self) -> Result<Vec<String>> {
        Ok(self.source.list_documents()?)
    }

    /// Rebuild the index from the source and swap it in.
    ///
    /// Only a failure to list documents is an error. Unreadable documents are
    /// skipped and reported.
    pub fn build_index(&self) -> Result<BuildReport> {
        let _guard = self.rebuild.lock();
        let started = Instant::now();

        let documents = self.source.list_documents()?;
        let extracted = self.extract_tokens(&documents);

        let mut builder = IndexBuilder::new(self.config.posting_mode);
        let mut skipped = Vec::new();
        for (document, tokens) in extracted {
            match tokens {
                Ok(tokens) => {
                    debug!(document = %document, tokens = tokens.len(), "indexed document");
                    builder.add_document(&document, &tokens);
                }
                Err(e) => {
                    warn!(document = %document, reason = %e, "skipping unreadable document");
                    skipped.push(SkippedDocument {
                        document,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let snapshot = Arc::new(builder.finish());
        let stats = snapshot.stats();
        *self.snapshot.write() = snapshot;

        info!(
            documents = stats.documents,
            skipped = skipped.len(),
            vocabulary = stats.vocabulary,
            ngrams = stats.unigrams + stats.bigrams + stats.trigrams,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "index built"
        );
        Ok(BuildReport { stats, skipped })
    }

    /// Conjunctive search: documents containing every query term as a token.
    ///
    /// With `scope`, only that document is considered, and it must exist.
    /// Rebuilds the index first when `always_rebuild` is set.
    pub fn search(&self, query: &str, scope: Option<&str>) -> Result<Vec<SearchResult>> {
        let terms = parse_nonempty_query(query)?;

        if let Some(document) = scope {
            if !self.source.contains(document)? {
                return Err(EngineError::NotFound(document.to_string()));
            }
        }

        if self.config.always_rebuild {
            self.build_index()?;
        }

        let candidates = match scope {
            Some(document) => vec![document.to_string()],
            None => self.source.list_documents()?,
        };

        let options = ContextOptions::from(&self.config);
        let mut results = self.scan(&candidates, |document, text| {
            evaluate_document(document, text, &terms, &options)
        });
        rank_results(&mut results);

        debug!(query, results = results.len(), "conjunctive search");
        Ok(results)
    }

    /// Union search over the current snapshot's inverted index.
    pub fn alternative_search_results(&self, query: &str) -> Result<Vec<UnionMatch>> {
        let terms = parse_nonempty_query(query)?;
        let snapshot = self.snapshot();
        Ok(union_search(snapshot.inverted(), &terms))
    }

    /// One page of `alternative_search_results`.
    pub fn alternative_search_page(
        &self,
        query: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Page<UnionMatch>> {
        paginate(self.alternative_search_results(query)?, page, page_size)
    }

    /// Stopword-free n-gram suggestions starting with `prefix`.
    pub fn autocomplete(&self, prefix: &str) -> Result<Vec<String>> {
        if prefix.trim().is_empty() {
            return Err(EngineError::EmptyQuery);
        }
        let snapshot = self.snapshot();
        Ok(autocomplete(snapshot.ngrams(), prefix))
    }

    /// Suggestions ordered by n-gram frequency.
    pub fn autocomplete_ranked(&self, prefix: &str, limit: Option<usize>) -> Result<Vec<Suggestion>> {
        if prefix.trim().is_empty() {
            return Err(EngineError::EmptyQuery);
        }
        let snapshot = self.snapshot();
        Ok(autocomplete_ranked(snapshot.ngrams(), prefix, limit))
    }

    /// Documents whose text contains any of the phrases, in listing order.
    pub fn substring_search<T: AsRef<str>>(&self, terms: &[T]) -> Result<Vec<String>> {
        let phrases = normalize_phrases(terms);
        if phrases.is_empty() {
            return Err(EngineError::EmptyQuery);
        }

        let documents = self.source.list_documents()?;
        Ok(self.scan(&documents, |document, text| {
            contains_any(text, &phrases).then(|| document.to_string())
        }))
    }

    fn extract(&self, document: &str) -> std::result::Result<String, SourceError> {
        self.extractor.extract(&self.source, document)
    }

    /// Extract and tokenize every document, keeping listing order.
    fn extract_tokens(
        &self,
        documents: &[String],
    ) -> Vec<(String, std::result::Result<Vec<String>, SourceError>)> {
        let work = |document: &String| {
            let tokens = self.extract(document).map(|text| tokenize(&text));
            (document.clone(), tokens)
        };

        #[cfg(feature = "parallel")]
        {
            documents.par_iter().map(work).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            documents.iter().map(work).collect()
        }
    }

    /// Run `f` over the text of each readable document, keeping listing order.
    fn scan<T, F>(&self, documents: &[String], f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&str, &str) -> Option<T> + Sync,
    {
        let work = |document: &String| match self.extract(document) {
            Ok(text) => f(document, &text),
            Err(e) => {
                warn!(document = %document, reason = %e, "skipping unreadable document");
                None
            }
        };

        #[cfg(feature = "parallel")]
        {
            documents.par_iter().filter_map(work).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            documents.iter().filter_map(work).collect()
        }
    }
}
