// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for document sources and engine operations.
//!
//! Two layers. `SourceError` is what a `DocumentSource` reports for a single
//! listing or extraction call; during a build it is logged and the document is
//! skipped. `EngineError` is what callers of `SearchEngine` see: bad input,
//! a scoped search on a missing document, or a source that cannot even list
//! its documents.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a document source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} is not valid UTF-8 text")]
    NotUtf8(String),
    #[error("extraction of {document} exceeded {timeout:?}")]
    Timeout { document: String, timeout: Duration },
    #[error("document {0} is unavailable: {1}")]
    Unavailable(String, String),
}

/// Failure surfaced by a `SearchEngine` operation.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("query is empty")]
    EmptyQuery,
    #[error("document {0} not found in collection")]
    NotFound(String),
    #[error("invalid page {page} with page size {page_size}: both must be at least 1")]
    InvalidPage { page: usize, page_size: usize },
    #[error("document source failed: {0}")]
    Source(#[from] SourceError),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
