// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Date-prefixed incident channel naming conventions.
//!
//! Incident channels are named `{date}{sep}{slug}`. Older channels use
//! underscores throughout (`2023_11_10_payment_api_outage`), newer ones use
//! hyphens (`2024-01-02-db-issue`). Each convention is checked on its own;
//! a name follows the incident convention if any of them matches.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

// `[0-9]` rather than `\d`: the latter matches any Unicode digit.
#[allow(clippy::expect_used)]
static UNDERSCORE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}_[0-9]{2}_[0-9]{2}").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static HYPHEN_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("constant regex pattern is valid")
});

/// A date-prefix shape accepted for incident channel names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DateConvention {
    /// `YYYY_MM_DD`
    Underscore,
    /// `YYYY-MM-DD`
    Hyphen,
}

impl DateConvention {
    /// Every accepted convention, in the order they are tried.
    pub const ALL: [DateConvention; 2] = [DateConvention::Underscore, DateConvention::Hyphen];

    pub fn separator(self) -> char {
        match self {
            DateConvention::Underscore => '_',
            DateConvention::Hyphen => '-',
        }
    }

    fn prefix_pattern(self) -> &'static Regex {
        match self {
            DateConvention::Underscore => &UNDERSCORE_PREFIX,
            DateConvention::Hyphen => &HYPHEN_PREFIX,
        }
    }

    /// Byte length of the date prefix at the start of `name`, if present.
    pub fn prefix_len(self, name: &str) -> Option<usize> {
        self.prefix_pattern().find(name).map(|m| m.end())
    }

    /// True when `name` starts with this convention's date and has at least
    /// one more character after it.
    pub fn matches_incident_name(self, name: &str) -> bool {
        self.prefix_len(name).is_some_and(|len| name.len() > len)
    }

    /// Render `date` as this convention's prefix.
    pub fn format_date(self, date: NaiveDate) -> String {
        match self {
            DateConvention::Underscore => date.format("%Y_%m_%d").to_string(),
            DateConvention::Hyphen => date.format("%Y-%m-%d").to_string(),
        }
    }

    /// First convention whose date prefix starts `name`.
    pub fn detect(name: &str) -> Option<DateConvention> {
        Self::ALL
            .into_iter()
            .find(|convention| convention.prefix_len(name).is_some())
    }
}

#[cfg(test)]
#[path = "convention_tests.rs"]
mod tests;
