// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::chat::{ChatAdapter, ChatError, UserGroup};
use async_trait::async_trait;
use ib_core::{ChannelId, ChannelRecord};
use tracing::Instrument;

/// Wrapper that adds tracing to any ChatAdapter
#[derive(Clone)]
pub struct TracedChat<C> {
    inner: C,
}

impl<C> TracedChat<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

fn log_failure(elapsed_ms: u64, e: &ChatError) {
    if e.is_transient() {
        tracing::warn!(elapsed_ms, error = %e, "transient failure");
    } else {
        tracing::error!(elapsed_ms, error = %e, "call failed");
    }
}

#[async_trait]
impl<C: ChatAdapter> ChatAdapter for TracedChat<C> {
    async fn create_channel(&self, name: &str) -> Result<ChannelId, ChatError> {
        async {
            tracing::info!("creating");
            let start = std::time::Instant::now();
            let result = self.inner.create_channel(name).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(id) => tracing::info!(channel_id = %id, elapsed_ms, "channel created"),
                Err(e) => log_failure(elapsed_ms, e),
            }
            result
        }
        .instrument(tracing::info_span!("chat.create_channel", name))
        .await
    }

    async fn post_message(&self, channel: &ChannelId, text: &str) -> Result<(), ChatError> {
        async {
            tracing::debug!(text_len = text.len(), "posting");
            let start = std::time::Instant::now();
            let result = self.inner.post_message(channel, text).await;
            if let Err(ref e) = result {
                log_failure(start.elapsed().as_millis() as u64, e);
            }
            result
        }
        .instrument(tracing::info_span!("chat.post_message", %channel))
        .await
    }

    async fn join_channel(&self, channel: &ChannelId) -> Result<(), ChatError> {
        let start = std::time::Instant::now();
        let result = self.inner.join_channel(channel).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info_span!("chat.join", %channel).in_scope(|| match &result {
            Ok(()) => tracing::info!(elapsed_ms, "joined"),
            Err(e) => log_failure(elapsed_ms, e),
        });
        result
    }

    async fn invite_users(
        &self,
        channel: &ChannelId,
        user_ids: &[String],
    ) -> Result<(), ChatError> {
        async {
            let start = std::time::Instant::now();
            let result = self.inner.invite_users(channel, user_ids).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(user_count = user_ids.len(), elapsed_ms, "invited"),
                Err(e) => log_failure(elapsed_ms, e),
            }
            result
        }
        .instrument(tracing::info_span!("chat.invite", %channel))
        .await
    }

    async fn list_channels(&self) -> Result<Vec<ChannelRecord>, ChatError> {
        async {
            let start = std::time::Instant::now();
            let result = self.inner.list_channels().await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(channels) => {
                    tracing::info!(channel_count = channels.len(), elapsed_ms, "listed")
                }
                Err(e) => log_failure(elapsed_ms, e),
            }
            result
        }
        .instrument(tracing::info_span!("chat.list_channels"))
        .await
    }

    async fn list_usergroups(&self) -> Result<Vec<UserGroup>, ChatError> {
        let start = std::time::Instant::now();
        let result = self.inner.list_usergroups().await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info_span!("chat.list_usergroups").in_scope(|| match &result {
            Ok(groups) => tracing::debug!(group_count = groups.len(), elapsed_ms, "listed"),
            Err(e) => log_failure(elapsed_ms, e),
        });
        result
    }

    async fn usergroup_members(&self, group_id: &str) -> Result<Vec<String>, ChatError> {
        let start = std::time::Instant::now();
        let result = self.inner.usergroup_members(group_id).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::trace!(group_id, members = ?result.as_ref().ok().map(Vec::len), elapsed_ms, "checked");
        if let Err(ref e) = result {
            log_failure(elapsed_ms, e);
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
