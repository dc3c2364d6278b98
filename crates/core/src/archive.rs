// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Selection of archived incident channels from a channel listing.

use crate::channel::ChannelRecord;
use crate::convention::DateConvention;

/// True when `channel` is archived and named like an incident channel.
pub fn is_incident_archive(channel: &ChannelRecord) -> bool {
    channel.is_archived
        && DateConvention::ALL
            .iter()
            .any(|convention| convention.matches_incident_name(&channel.name))
}

/// Archived incident channels from `channels`, in listing order.
pub fn select_incident_archives(channels: &[ChannelRecord]) -> Vec<&ChannelRecord> {
    channels.iter().filter(|c| is_incident_archive(c)).collect()
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
