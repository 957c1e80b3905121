// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word tokenization.
//!
//! A word is a maximal run of `\w` characters: Unicode letters, digits,
//! connector punctuation (underscore), combining marks and the zero-width
//! joiners (`U+200C`, `U+200D`). Everything else separates words and is
//! dropped. Case folding is the only normalization; no stemming, no
//! diacritic stripping, no canonical composition.
//!
//! Because combining marks belong to the word, a decomposed `e` + `U+0301`
//! stays one token, but it is a different token from the precomposed `é`.

use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("static word pattern"));

/// Tokenize text into lowercase words in occurrence order.
///
/// # Example
///
/// ```
/// use owleye::tokenize;
///
/// assert_eq!(tokenize("Net-Profit sharing!"), vec!["net", "profit", "sharing"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
