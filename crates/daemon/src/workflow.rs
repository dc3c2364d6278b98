// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Opening an incident: channel, announcement, responders, related history.

use crate::config::Config;
use crate::error::WorkflowError;
use crate::notify;
use crate::template::Announcement;
use ib_adapters::{ChatAdapter, ChatError};
use ib_core::{build_title, find_related_incidents, ChannelId, ChannelRecord, ChannelRef, Clock};
use std::sync::Arc;
use tracing::{info, warn};

/// A request to open an incident, as typed by a user.
#[derive(Debug, Clone, Default)]
pub struct IncidentRequest {
    pub description: String,
    pub user_id: String,
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentOutcome {
    pub channel_id: ChannelId,
    pub channel_name: String,
    /// Archived incidents sharing a token with the new channel's name
    pub related: Vec<ChannelRef>,
}

#[derive(Clone)]
pub struct IncidentWorkflow<C, K> {
    chat: C,
    clock: K,
    config: Arc<Config>,
}

impl<C: ChatAdapter, K: Clock> IncidentWorkflow<C, K> {
    pub fn new(chat: C, clock: K, config: Arc<Config>) -> Self {
        Self {
            chat,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn open_incident(
        &self,
        request: &IncidentRequest,
    ) -> Result<IncidentOutcome, WorkflowError> {
        let templates = &self.config.templates;
        let title = build_title(&request.description, self.clock.today());
        info!(%title, "opening incident channel");

        let channel_id = self
            .chat
            .create_channel(&title)
            .await
            .map_err(WorkflowError::chat("create incident channel"))?;
        self.chat
            .post_message(&channel_id, &templates.main_message(&request.description))
            .await
            .map_err(WorkflowError::chat("post main message"))?;

        // One snapshot serves both the announcement lookup and the matcher.
        let listing = self
            .chat
            .list_channels()
            .await
            .map_err(WorkflowError::chat("list channels"))?;

        self.announce(&listing, &channel_id, &title, request).await?;
        self.invite_responders(&channel_id).await?;

        let related = find_related_incidents(&title, &listing);
        if let Some(text) = notify::related_incidents_message(templates, &related) {
            self.chat
                .post_message(&channel_id, &text)
                .await
                .map_err(WorkflowError::chat("post related incidents"))?;
        }
        info!(%title, %channel_id, related = related.len(), "incident opened");

        Ok(IncidentOutcome {
            channel_id,
            channel_name: title,
            related,
        })
    }

    async fn announce(
        &self,
        listing: &[ChannelRecord],
        channel_id: &ChannelId,
        title: &str,
        request: &IncidentRequest,
    ) -> Result<(), WorkflowError> {
        let wanted = &self.config.announce_channel;
        let target = listing
            .iter()
            .find(|c| !c.is_archived && &c.name == wanted)
            .ok_or_else(|| WorkflowError::AnnounceChannelNotFound(wanted.clone()))?;

        self.chat
            .join_channel(&target.id)
            .await
            .map_err(WorkflowError::chat("join announcement channel"))?;
        let text = self.config.templates.announcement(&Announcement {
            description: &request.description,
            title,
            channel_id: channel_id.as_str(),
            user: &request.user_name,
        });
        self.chat
            .post_message(&target.id, &text)
            .await
            .map_err(WorkflowError::chat("post announcement"))
    }

    /// Invite every member of the configured groups, once each.
    async fn invite_responders(&self, channel_id: &ChannelId) -> Result<(), WorkflowError> {
        let wanted = &self.config.groups_to_invite;
        if wanted.is_empty() {
            return Ok(());
        }
        let groups = self
            .chat
            .list_usergroups()
            .await
            .map_err(WorkflowError::chat("list user groups"))?;

        let mut users: Vec<String> = Vec::new();
        for name in wanted {
            let Some(group) = groups.iter().find(|g| g.is_named(name)) else {
                warn!(group = %name, "user group not found, skipping");
                continue;
            };
            let members = self
                .chat
                .usergroup_members(&group.id)
                .await
                .map_err(WorkflowError::chat("list group members"))?;
            for member in members {
                if !users.contains(&member) {
                    users.push(member);
                }
            }
        }

        if users.is_empty() {
            return Ok(());
        }
        self.chat
            .invite_users(channel_id, &users)
            .await
            .map_err(WorkflowError::chat("invite responders"))
    }

    /// Tell the requester something went wrong, in the channel they typed
    /// the command in.
    pub async fn report_failure(&self, channel_id: &ChannelId) -> Result<(), ChatError> {
        self.chat.join_channel(channel_id).await?;
        self.chat
            .post_message(channel_id, self.config.templates.generic_error())
            .await
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
