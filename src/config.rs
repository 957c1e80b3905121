// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration and the defaults behind it.
//!
//! Defaults are plain constants so tests and the CLI can refer to them by
//! name. `EngineConfig` deserializes from JSON with every field optional, so a
//! config file only needs the keys it wants to change.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{EngineError, Result};

/// Lines of context taken on each side of a matching line.
pub const DEFAULT_CONTEXT_RADIUS: usize = 2;

/// Marker inserted before a highlighted term.
pub const DEFAULT_HIGHLIGHT_OPEN: &str = "<mark>";

/// Marker inserted after a highlighted term.
pub const DEFAULT_HIGHLIGHT_CLOSE: &str = "</mark>";

/// Upper bound on extracting a single document, in milliseconds.
pub const DEFAULT_EXTRACTION_TIMEOUT_MS: u64 = 30_000;

/// Results per page for paginated union search.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Extension accepted by `DirectorySource` when none is configured.
pub const DEFAULT_EXTENSION: &str = "txt";

/// How posting lists record documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingMode {
    /// A document appears at most once in a token's posting list.
    #[default]
    PerDocument,
    /// One entry per token occurrence; a document repeats as often as the token does.
    PerOccurrence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rebuild the index before every conjunctive search.
    pub always_rebuild: bool,
    pub posting_mode: PostingMode,
    pub context_radius: usize,
    pub highlight_open: String,
    pub highlight_close: String,
    /// 0 disables the bound.
    pub extraction_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            always_rebuild: true,
            posting_mode: PostingMode::PerDocument,
            context_radius: DEFAULT_CONTEXT_RADIUS,
            highlight_open: DEFAULT_HIGHLIGHT_OPEN.to_string(),
            highlight_close: DEFAULT_HIGHLIGHT_CLOSE.to_string(),
            extraction_timeout_ms: DEFAULT_EXTRACTION_TIMEOUT_MS,
        }
    }
}

impl EngineConfig {
    /// Load a config from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EngineError::Config(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject highlight markers that would make snippets unreadable.
    pub fn validate(&self) -> Result<()> {
        if self.highlight_open.is_empty() || self.highlight_close.is_empty() {
            return Err(EngineError::Config(
                "highlight markers must not be empty".to_string(),
            ));
        }
        if self.highlight_open == self.highlight_close {
            return Err(EngineError::Config(
                "highlight_open and highlight_close must differ".to_string(),
            ));
        }
        Ok(())
    }

    pub fn extraction_timeout(&self) -> Option<Duration> {
        match self.extraction_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}
