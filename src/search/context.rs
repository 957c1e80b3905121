// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Context snippets: the lines around each match, with terms marked.
//!
//! Matching here is raw substring matching on lowercased lines, not token
//! matching. A query term `lease` marks `lease` inside `leasehold` too. That is
//! intentional for display: the snippet shows where the characters are, the
//! search path decides whether the document matched at all.
//!
//! Each matching line yields its own snippet. Two matches on adjacent lines give
//! two overlapping windows, not one merged window.
//!
//! Line breaks are the full Unicode set (`\r`, form feed, `U+2028` and the
//! rest), not just `\n`. Text extracted from PDFs separates pages with form
//! feeds and older tools end lines with a bare `\r`.

use crate::config::{EngineConfig, DEFAULT_CONTEXT_RADIUS, DEFAULT_HIGHLIGHT_CLOSE, DEFAULT_HIGHLIGHT_OPEN};
use serde::Serialize;

/// A window of lines around one matching line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextSnippet {
    /// Lowercased window text with highlight markers.
    pub context: String,
    /// Zero-based index of the matching line.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextOptions {
    /// Lines taken on each side of the matching line.
    pub radius: usize,
    pub open: String,
    pub close: String,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_CONTEXT_RADIUS,
            open: DEFAULT_HIGHLIGHT_OPEN.to_string(),
            close: DEFAULT_HIGHLIGHT_CLOSE.to_string(),
        }
    }
}

impl From<&EngineConfig> for ContextOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            radius: config.context_radius,
            open: config.highlight_open.clone(),
            close: config.highlight_close.clone(),
        }
    }
}

/// Snippets for every line of `text` containing any of `terms`.
///
/// `terms` are expected lowercase (as produced by `parse_query`).
pub fn extract_context(text: &str, terms: &[String], options: &ContextOptions) -> Vec<ContextSnippet> {
    let lines = split_lines(text);
    let mut snippets = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let lowered = line.to_lowercase();
        if !terms.iter().any(|t| lowered.contains(t.as_str())) {
            continue;
        }

        let start = i.saturating_sub(options.radius);
        let end = i.saturating_add(options.radius).saturating_add(1).min(lines.len());
        let window = lines[start..end].join(" ").to_lowercase();

        snippets.push(ContextSnippet {
            context: highlight(&window, terms, &options.open, &options.close),
            line: i,
        });
    }

    snippets
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split on every line break, `\r\n` counting once.
///
/// A trailing break does not produce a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Wrap every occurrence of every term in `open`/`close`.
///
/// Occurrences are collected first and overlapping ones merged, so a term that
/// happens to occur inside a marker (say `mark`) never corrupts the output.
pub fn highlight(text: &str, terms: &[String], open: &str, close: &str) -> String {
    let mut ranges: Vec<(usize, usize)> = terms
        .iter()
        .filter(|t| !t.is_empty())
        .flat_map(|t| text.match_indices(t.as_str()).map(|(pos, m)| (pos, pos + m.len())))
        .collect();

    if ranges.is_empty() {
        return text.to_string();
    }

    ranges.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start < last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut out = String::with_capacity(text.len() + merged.len() * (open.len() + close.len()));
    let mut cursor = 0;
    for (start, end) in merged {
        out.push_str(&text[cursor..start]);
        out.push_str(open);
        out.push_str(&text[start..end]);
        out.push_str(close);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}
