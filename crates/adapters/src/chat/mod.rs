// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chat platform adapters

mod slack;

pub use slack::SlackChatAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ChatCall, FakeChatAdapter};

use async_trait::async_trait;
use ib_core::{ChannelId, ChannelRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platform method names, shared by the real and fake adapters.
pub mod method {
    pub const CREATE_CHANNEL: &str = "conversations.create";
    pub const POST_MESSAGE: &str = "chat.postMessage";
    pub const JOIN_CHANNEL: &str = "conversations.join";
    pub const INVITE_USERS: &str = "conversations.invite";
    pub const LIST_CHANNELS: &str = "conversations.list";
    pub const LIST_USERGROUPS: &str = "usergroups.list";
    pub const USERGROUP_MEMBERS: &str = "usergroups.users.list";
}

/// Platform error codes that clear up on their own.
const TRANSIENT_CODES: &[&str] = &[
    "dispatch_failed",
    "fatal_error",
    "internal_error",
    "ratelimited",
    "request_timeout",
    "service_unavailable",
];

/// Errors from chat platform operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("{method} failed: {code}")]
    Api { method: String, code: String },
    #[error("{method} returned HTTP {status}")]
    Status { method: String, status: u16 },
    #[error("{method} request failed: {message}")]
    Transport { method: String, message: String },
    #[error("{method} returned a malformed response: {message}")]
    Decode { method: String, message: String },
}

impl ChatError {
    pub fn api(method: &str, code: &str) -> Self {
        ChatError::Api {
            method: method.to_string(),
            code: code.to_string(),
        }
    }

    /// Platform method the error came from.
    pub fn method(&self) -> &str {
        match self {
            ChatError::Api { method, .. }
            | ChatError::Status { method, .. }
            | ChatError::Transport { method, .. }
            | ChatError::Decode { method, .. } => method,
        }
    }

    /// Platform error code, for API-level failures.
    pub fn code(&self) -> Option<&str> {
        match self {
            ChatError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// True for failures worth reporting as "try again" rather than as a
    /// broken request: dispatch failures, rate limits, timeouts and 5xx.
    pub fn is_transient(&self) -> bool {
        match self {
            ChatError::Api { code, .. } => TRANSIENT_CODES.contains(&code.as_str()),
            ChatError::Status { status, .. } => *status == 429 || *status >= 500,
            ChatError::Transport { .. } => true,
            ChatError::Decode { .. } => false,
        }
    }
}

/// A platform user group (e.g. `@oncall-backend`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub handle: String,
}

impl UserGroup {
    pub fn new(id: impl Into<String>, name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            handle: handle.into(),
        }
    }

    /// True when `wanted` is this group's display name or handle.
    pub fn is_named(&self, wanted: &str) -> bool {
        self.name == wanted || self.handle == wanted
    }
}

/// Adapter for the chat platform the bot operates in
#[async_trait]
pub trait ChatAdapter: Clone + Send + Sync + 'static {
    /// Create a public channel, returning its id
    async fn create_channel(&self, name: &str) -> Result<ChannelId, ChatError>;

    /// Post a plain-text message into a channel
    async fn post_message(&self, channel: &ChannelId, text: &str) -> Result<(), ChatError>;

    /// Make the bot a member of a channel
    async fn join_channel(&self, channel: &ChannelId) -> Result<(), ChatError>;

    /// Invite users into a channel
    async fn invite_users(&self, channel: &ChannelId, user_ids: &[String])
        -> Result<(), ChatError>;

    /// Full channel listing, archived channels included
    async fn list_channels(&self) -> Result<Vec<ChannelRecord>, ChatError>;

    /// All user groups in the workspace
    async fn list_usergroups(&self) -> Result<Vec<UserGroup>, ChatError>;

    /// User ids belonging to a user group
    async fn usergroup_members(&self, group_id: &str) -> Result<Vec<String>, ChatError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
