// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering match results as chat messages

use crate::template::MessageTemplates;
use ib_core::ChannelRef;

/// Platform channel mention, e.g. `<#C0123>`
pub fn mention(channel: &ChannelRef) -> String {
    format!("<#{}>", channel.id)
}

/// Related-incidents message, or `None` when nothing matched.
pub fn related_incidents_message(
    templates: &MessageTemplates,
    related: &[ChannelRef],
) -> Option<String> {
    if related.is_empty() {
        return None;
    }
    let incidents = related.iter().map(mention).collect::<Vec<_>>().join(", ");
    Some(templates.related(&incidents))
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
