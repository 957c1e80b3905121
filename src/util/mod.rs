// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by indexing and search.
//!
//! The tokenizer is the only place that decides what a word is, and the
//! stopword list is the only place that decides which words autocomplete
//! hides. Everything else builds on those two.

pub mod stopwords;
pub mod tokenize;
