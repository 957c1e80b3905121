// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms over documents and snapshots.
//!
//! Four ways to ask a question:
//! - **Conjunctive**: every term must be a token of the document (scans text)
//! - **Union**: any term, ranked by overlap fraction (reads the index)
//! - **Autocomplete**: prefix over n-grams
//! - **Substring**: raw phrase containment (scans text)
//!
//! The functions here are pure; `SearchEngine` supplies the text and
//! snapshots.

pub mod autocomplete;
pub mod conjunctive;
pub mod context;
pub mod substring;
pub mod union;
pub mod utils;

pub use autocomplete::{autocomplete, autocomplete_ranked, Suggestion};
pub use conjunctive::{evaluate_document, rank_results, SearchResult};
pub use context::{extract_context, highlight, ContextOptions, ContextSnippet};
pub use union::{union_search, UnionMatch};
pub use utils::{paginate, parse_query, Page};
