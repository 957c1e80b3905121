// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Directory of plain-text files as a document source.
//!
//! Document names are bare file names. Only regular files directly inside the
//! root are listed (no recursion), filtered by extension, sorted by name so
//! repeated listings of an unchanged directory agree.

use super::DocumentSource;
use crate::config::DEFAULT_EXTENSION;
use crate::error::SourceError;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extensions: Vec<String>,
}

impl DirectorySource {
    /// Source over `root` accepting `.txt` files.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }

    /// Replace the accepted extensions. An empty list accepts every file.
    pub fn with_extensions<I, E>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
    }

    /// Resolve a document name to a path inside the root.
    ///
    /// Names with separators or `..` never resolve, so a caller-supplied scope
    /// cannot reach outside the directory.
    fn resolve(&self, document: &str) -> Option<PathBuf> {
        let name = Path::new(document);
        if name.file_name().and_then(|n| n.to_str()) != Some(document) {
            return None;
        }
        let path = self.root.join(name);
        (path.is_file() && self.accepts(&path)).then_some(path)
    }
}

impl DocumentSource for DirectorySource {
    fn list_documents(&self) -> Result<Vec<String>, SourceError> {
        let entries = fs::read_dir(&self.root).map_err(|e| SourceError::Io {
            path: self.root.clone(),
            source: e,
        })?;

        let mut documents = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SourceError::Io {
                path: self.root.clone(),
                source: e,
            })?;
            let path = entry.path();
            if !path.is_file() || !self.accepts(&path) {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => documents.push(name),
                Err(name) => {
                    tracing::warn!(file = ?name, "skipping file with non UTF-8 name");
                }
            }
        }
        documents.sort();
        Ok(documents)
    }

    fn extract_text(&self, document: &str) -> Result<String, SourceError> {
        let path = self.resolve(document).ok_or_else(|| {
            SourceError::Unavailable(document.to_string(), "no such document".to_string())
        })?;
        let bytes = fs::read(&path).map_err(|e| SourceError::Io {
            path: path.clone(),
            source: e,
        })?;
        String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8(document.to_string()))
    }

    fn contains(&self, document: &str) -> Result<bool, SourceError> {
        Ok(self.resolve(document).is_some())
    }
}
