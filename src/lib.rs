// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document indexing and search over a collection of text documents.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐     ┌───────────────┐     ┌───────────────┐
//! │   source/     │────▶│   index/      │────▶│   search/     │
//! │ (listing,     │     │ (vocabulary,  │     │ (conjunctive, │
//! │  extraction)  │     │  n-grams,     │     │  union,       │
//! │               │     │  inverted)    │     │  autocomplete)│
//! └───────────────┘     └───────────────┘     └───────────────┘
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        engine.rs                            │
//! │   SearchEngine: source + Arc<IndexSnapshot> swapped on      │
//! │   rebuild, one rebuild at a time                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Conjunctive search and substring search read document text directly.
//! Union search and autocomplete read the most recent snapshot, so they see
//! the collection as of the last `build_index`.
//!
//! # Usage
//!
//! ```no_run
//! use owleye::{DirectorySource, EngineConfig, SearchEngine};
//!
//! let source = DirectorySource::new("contracts");
//! let engine = SearchEngine::open(source, EngineConfig::default())?;
//!
//! for result in engine.search("net profit", None)? {
//!     println!("{} ({:.0}%)", result.document, result.match_percentage);
//! }
//! # Ok::<(), owleye::EngineError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod search;
pub mod source;
pub mod testing;
pub mod util;

pub use config::{EngineConfig, PostingMode};
pub use engine::{BuildReport, SearchEngine, SkippedDocument};
pub use error::{EngineError, Result, SourceError};
pub use index::{build_snapshot, IndexBuilder, IndexSnapshot, IndexStats, InvertedIndex, NGramTable};
pub use search::{
    autocomplete, autocomplete_ranked, extract_context, highlight, paginate, parse_query, union_search,
    ContextOptions, ContextSnippet, Page, SearchResult, Suggestion, UnionMatch,
};
pub use source::{DirectorySource, DocumentSource, Extractor};
pub use util::stopwords::{is_stop_word, STOP_WORDS};
pub use util::tokenize::tokenize;
