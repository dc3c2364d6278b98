// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Matching a new incident against archived incident channels.
//!
//! A single shared significant token is enough for two channels to be
//! related. There is no score and no threshold, so very common words that
//! are not stop words (service names, "api") relate many incidents.

use crate::archive::select_incident_archives;
use crate::channel::{ChannelRecord, ChannelRef};
use crate::normalize::normalize;

/// True when the two names share at least one normalized token.
pub fn shares_token(a: &str, b: &str) -> bool {
    normalize(a).intersects(&normalize(b))
}

/// Channels in `archived` that share a token with `candidate_name`.
///
/// Output keeps the order of `archived`. A candidate with an empty token set
/// matches nothing.
pub fn find_similar<'a, I>(candidate_name: &str, archived: I) -> Vec<ChannelRef>
where
    I: IntoIterator<Item = &'a ChannelRecord>,
{
    let candidate = normalize(candidate_name);
    if candidate.is_empty() {
        return Vec::new();
    }
    archived
        .into_iter()
        .filter(|channel| normalize(&channel.name).intersects(&candidate))
        .map(ChannelRecord::to_ref)
        .collect()
}

/// Archived incident channels in `listing` related to `candidate_name`.
pub fn find_related_incidents(candidate_name: &str, listing: &[ChannelRecord]) -> Vec<ChannelRef> {
    find_similar(candidate_name, select_incident_archives(listing))
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
