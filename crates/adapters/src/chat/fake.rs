// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake chat adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{method, ChatAdapter, ChatError, UserGroup};
use async_trait::async_trait;
use ib_core::{ChannelId, ChannelRecord};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Recorded chat call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCall {
    CreateChannel { name: String },
    PostMessage { channel: ChannelId, text: String },
    JoinChannel { channel: ChannelId },
    InviteUsers { channel: ChannelId, users: Vec<String> },
    ListChannels,
    ListUserGroups,
    UserGroupMembers { group_id: String },
}

#[derive(Default)]
struct FakeChatState {
    channels: Vec<ChannelRecord>,
    usergroups: Vec<UserGroup>,
    members: HashMap<String, Vec<String>>,
    failures: HashMap<&'static str, ChatError>,
    calls: Vec<ChatCall>,
    next_id: u64,
}

impl FakeChatState {
    fn fail_if_set(&self, method: &str) -> Result<(), ChatError> {
        match self.failures.get(method) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn require_channel(&self, method: &str, channel: &ChannelId) -> Result<(), ChatError> {
        if self.channels.iter().any(|c| &c.id == channel) {
            Ok(())
        } else {
            Err(ChatError::api(method, "channel_not_found"))
        }
    }
}

/// In-memory chat workspace.
///
/// Created channels appear in later listings. Failures injected with
/// [`FakeChatAdapter::fail`] are returned (after the call is recorded)
/// until cleared.
#[derive(Clone, Default)]
pub struct FakeChatAdapter {
    inner: Arc<Mutex<FakeChatState>>,
}

impl FakeChatAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a channel into the listing
    pub fn with_channel(self, id: &str, name: &str, is_archived: bool) -> Self {
        self.inner
            .lock()
            .channels
            .push(ChannelRecord::new(id, name, is_archived));
        self
    }

    /// Seed a user group and its members
    pub fn add_usergroup(&self, group: UserGroup, members: &[&str]) {
        let mut inner = self.inner.lock();
        inner.members.insert(
            group.id.clone(),
            members.iter().map(|m| m.to_string()).collect(),
        );
        inner.usergroups.push(group);
    }

    /// Make every call to `method` fail with `err`
    pub fn fail(&self, method: &'static str, err: ChatError) {
        self.inner.lock().failures.insert(method, err);
    }

    pub fn clear_failures(&self) {
        self.inner.lock().failures.clear();
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ChatCall> {
        self.inner.lock().calls.clone()
    }

    /// Texts posted into `channel`, in order
    pub fn messages_in(&self, channel: &ChannelId) -> Vec<String> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                ChatCall::PostMessage { channel: c, text } if c == channel => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Id of the channel called `name`, if any
    pub fn channel_id(&self, name: &str) -> Option<ChannelId> {
        self.inner
            .lock()
            .channels
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id.clone())
    }
}

#[async_trait]
impl ChatAdapter for FakeChatAdapter {
    async fn create_channel(&self, name: &str) -> Result<ChannelId, ChatError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ChatCall::CreateChannel {
            name: name.to_string(),
        });
        inner.fail_if_set(method::CREATE_CHANNEL)?;
        if inner.channels.iter().any(|c| c.name == name) {
            return Err(ChatError::api(method::CREATE_CHANNEL, "name_taken"));
        }
        inner.next_id += 1;
        let id = ChannelId::new(format!("CFAKE{}", inner.next_id));
        inner
            .channels
            .push(ChannelRecord::new(id.clone(), name, false));
        Ok(id)
    }

    async fn post_message(&self, channel: &ChannelId, text: &str) -> Result<(), ChatError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ChatCall::PostMessage {
            channel: channel.clone(),
            text: text.to_string(),
        });
        inner.fail_if_set(method::POST_MESSAGE)?;
        inner.require_channel(method::POST_MESSAGE, channel)
    }

    async fn join_channel(&self, channel: &ChannelId) -> Result<(), ChatError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ChatCall::JoinChannel {
            channel: channel.clone(),
        });
        inner.fail_if_set(method::JOIN_CHANNEL)?;
        inner.require_channel(method::JOIN_CHANNEL, channel)
    }

    async fn invite_users(
        &self,
        channel: &ChannelId,
        user_ids: &[String],
    ) -> Result<(), ChatError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ChatCall::InviteUsers {
            channel: channel.clone(),
            users: user_ids.to_vec(),
        });
        inner.fail_if_set(method::INVITE_USERS)?;
        inner.require_channel(method::INVITE_USERS, channel)
    }

    async fn list_channels(&self) -> Result<Vec<ChannelRecord>, ChatError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ChatCall::ListChannels);
        inner.fail_if_set(method::LIST_CHANNELS)?;
        Ok(inner.channels.clone())
    }

    async fn list_usergroups(&self) -> Result<Vec<UserGroup>, ChatError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ChatCall::ListUserGroups);
        inner.fail_if_set(method::LIST_USERGROUPS)?;
        Ok(inner.usergroups.clone())
    }

    async fn usergroup_members(&self, group_id: &str) -> Result<Vec<String>, ChatError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ChatCall::UserGroupMembers {
            group_id: group_id.to_string(),
        });
        inner.fail_if_set(method::USERGROUP_MEMBERS)?;
        inner
            .members
            .get(group_id)
            .cloned()
            .ok_or_else(|| ChatError::api(method::USERGROUP_MEMBERS, "no_such_subteam"))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
