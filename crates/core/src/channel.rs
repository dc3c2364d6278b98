// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel identifiers and listing records.

use serde::{Deserialize, Serialize};

/// Opaque chat-platform channel identifier (e.g. `C024BE91L`).
///
/// Wraps a `String` so channel ids are not confused with channel names at the
/// type level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::ops::Deref for ChannelId {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ChannelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ChannelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ChannelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One entry of a channel listing snapshot.
///
/// Deserializes straight from a platform conversation object; fields other
/// than `id`, `name` and `is_archived` are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub id: ChannelId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_archived: bool,
}

impl ChannelRecord {
    pub fn new(id: impl Into<ChannelId>, name: impl Into<String>, is_archived: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_archived,
        }
    }

    /// Reference to this channel, as handed to notification formatting.
    pub fn to_ref(&self) -> ChannelRef {
        ChannelRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Id-bearing reference to a channel.
///
/// Carries no platform markup; rendering a mention is the notifier's job.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelRef {
    pub id: ChannelId,
    pub name: String,
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
