// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel name normalization into comparable token sets.

use crate::convention::DateConvention;
use crate::stop_words::is_stop_word;

/// Lowercase topical words derived from a channel name's slug.
///
/// Derivation order is kept so output is deterministic, but comparisons
/// treat the tokens as a set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSet(Vec<String>);

impl TokenSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True when at least one token appears in both sets.
    pub fn intersects(&self, other: &TokenSet) -> bool {
        self.iter().any(|t| other.contains(t))
    }

    /// Tokens of `self` that also appear in `other`, in `self`'s order.
    pub fn shared<'a>(&'a self, other: &TokenSet) -> Vec<&'a str> {
        self.iter().filter(|t| other.contains(t)).collect()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Drop a leading date prefix and the separator right after it.
///
/// Names without a recognised prefix come back unchanged.
pub fn strip_date_prefix(raw_name: &str) -> &str {
    let Some(len) = DateConvention::detect(raw_name).and_then(|c| c.prefix_len(raw_name)) else {
        return raw_name;
    };
    let rest = &raw_name[len..];
    rest.strip_prefix(is_separator).unwrap_or(rest)
}

/// Normalize a channel name or free-text title into its token set.
///
/// Strips the date prefix, removes digits, lowercases, splits on `_`/`-`,
/// then drops empty tokens and stop words. Never fails: a name with nothing
/// left yields an empty set.
pub fn normalize(raw_name: &str) -> TokenSet {
    let slug: String = strip_date_prefix(raw_name)
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect();
    let lower = slug.to_lowercase();

    let tokens = lower
        .split(is_separator)
        .filter(|token| !token.is_empty() && !is_stop_word(token))
        .map(str::to_string)
        .collect();
    TokenSet(tokens)
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-'
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
