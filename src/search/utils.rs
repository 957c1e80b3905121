// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search modules.
//!
//! The boring-but-essential functions that every search path needs:
//! query parsing, match percentages and pagination.

use crate::error::{EngineError, Result};
use serde::Serialize;

/// Parse a query string into lowercase, whitespace-separated terms.
///
/// Repeated terms are kept: `"term term"` yields two terms, and both count
/// toward the match percentage. Punctuation is not stripped, so `"five,"`
/// will not match the token `five`.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("Hello World");
/// assert_eq!(terms, vec!["hello", "world"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

/// Parse a query, rejecting one with no terms.
pub fn parse_nonempty_query(query: &str) -> Result<Vec<String>> {
    let terms = parse_query(query);
    if terms.is_empty() {
        return Err(EngineError::EmptyQuery);
    }
    Ok(terms)
}

/// `matched / total * 100`, with 0 for an empty query.
pub fn match_percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    matched as f64 / total as f64 * 100.0
}

/// One page of an ordered result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Length of the full result list.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Slice `items` into 1-based page `page` of `page_size` entries.
///
/// Pages past the end are empty but still report the full `total`.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Result<Page<T>> {
    if page == 0 || page_size == 0 {
        return Err(EngineError::InvalidPage { page, page_size });
    }

    let total = items.len();
    let start = (page - 1).saturating_mul(page_size);
    let items = items.into_iter().skip(start).take(page_size).collect();

    Ok(Page {
        items,
        total,
        page,
        page_size,
    })
}
