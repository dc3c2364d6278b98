// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Incident channel title building.

use crate::convention::DateConvention;
use chrono::NaiveDate;

/// Maximum length of a built title in characters, date prefix included.
pub const MAX_TITLE_LEN: usize = 60;

/// Slugify a free-text incident description.
///
/// Lowercases and turns every whitespace character and hyphen into `_`.
/// Nothing is collapsed or removed, so the same description always yields
/// the same slug.
pub fn slugify(description: &str) -> String {
    description
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() || c == '-' { '_' } else { c })
        .collect()
}

/// Build the channel name for a new incident opened on `today`.
///
/// Format is `YYYY_MM_DD_{slug}`, cut to [`MAX_TITLE_LEN`] characters after
/// the date is prefixed, so the cap covers the whole name.
pub fn build_title(description: &str, today: NaiveDate) -> String {
    let convention = DateConvention::Underscore;
    let full = format!(
        "{}{}{}",
        convention.format_date(today),
        convention.separator(),
        slugify(description)
    );
    full.chars().take(MAX_TITLE_LEN).collect()
}

#[cfg(test)]
#[path = "title_tests.rs"]
mod tests;
