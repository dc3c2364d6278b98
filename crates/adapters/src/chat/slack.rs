// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Slack Web API adapter.
//!
//! Every call is a form-encoded POST to `{base_url}/{method}` with the bot
//! token as bearer auth. Slack answers HTTP 200 for most failures and
//! reports them in the `{ "ok": false, "error": "<code>" }` envelope.

use super::{method, ChatAdapter, ChatError, UserGroup};
use crate::env;
use async_trait::async_trait;
use ib_core::{ChannelId, ChannelRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

/// Page size requested from `conversations.list`.
const LIST_PAGE_SIZE: &str = "200";

/// Upper bound on followed cursors, in case the platform keeps returning one.
const MAX_LIST_PAGES: usize = 100;

#[derive(Clone)]
pub struct SlackChatAdapter {
    client: reqwest::Client,
    base_url: String,
    token: Arc<str>,
}

impl std::fmt::Debug for SlackChatAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackChatAdapter")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl SlackChatAdapter {
    /// Adapter against the API root from the environment (default
    /// `https://slack.com/api`).
    pub fn new(token: impl Into<String>) -> Result<Self, ChatError> {
        Self::with_base_url(token, env::slack_api_url())
    }

    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(env::slack_timeout())
            .build()
            .map_err(|e| ChatError::Transport {
                method: "client".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Arc::from(token.into()),
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<T, ChatError> {
        let url = format!("{}/{}", self.base_url, method);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&*self.token)
            .form(params)
            .send()
            .await
            .map_err(|e| ChatError::Transport {
                method: method.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status {
                method: method.to_string(),
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| ChatError::Decode {
            method: method.to_string(),
            message: e.to_string(),
        })?;
        decode_envelope(method, body)
    }
}

#[derive(Deserialize)]
struct Envelope {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Check the `ok` flag of a response body, then decode the payload.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    method: &str,
    body: serde_json::Value,
) -> Result<T, ChatError> {
    let envelope = Envelope::deserialize(&body).map_err(|e| ChatError::Decode {
        method: method.to_string(),
        message: e.to_string(),
    })?;
    if !envelope.ok {
        let code = envelope.error.as_deref().unwrap_or("unknown_error");
        return Err(ChatError::api(method, code));
    }
    serde_json::from_value(body).map_err(|e| ChatError::Decode {
        method: method.to_string(),
        message: e.to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct Empty {}

#[derive(Debug, Deserialize)]
struct CreatedChannel {
    channel: ChannelRecord,
}

#[derive(Deserialize)]
struct ChannelPage {
    #[serde(default)]
    channels: Vec<ChannelRecord>,
    #[serde(default)]
    response_metadata: Option<ResponseMetadata>,
}

#[derive(Deserialize)]
struct ResponseMetadata {
    #[serde(default)]
    next_cursor: String,
}

#[derive(Deserialize)]
struct UserGroupList {
    #[serde(default)]
    usergroups: Vec<UserGroup>,
}

#[derive(Deserialize)]
struct UserGroupMembers {
    #[serde(default)]
    users: Vec<String>,
}

#[async_trait]
impl ChatAdapter for SlackChatAdapter {
    async fn create_channel(&self, name: &str) -> Result<ChannelId, ChatError> {
        let created: CreatedChannel = self
            .call(method::CREATE_CHANNEL, &[("name", name.to_string())])
            .await?;
        Ok(created.channel.id)
    }

    async fn post_message(&self, channel: &ChannelId, text: &str) -> Result<(), ChatError> {
        let _: Empty = self
            .call(
                method::POST_MESSAGE,
                &[("channel", channel.to_string()), ("text", text.to_string())],
            )
            .await?;
        Ok(())
    }

    async fn join_channel(&self, channel: &ChannelId) -> Result<(), ChatError> {
        let _: Empty = self
            .call(method::JOIN_CHANNEL, &[("channel", channel.to_string())])
            .await?;
        Ok(())
    }

    async fn invite_users(
        &self,
        channel: &ChannelId,
        user_ids: &[String],
    ) -> Result<(), ChatError> {
        let _: Empty = self
            .call(
                method::INVITE_USERS,
                &[("channel", channel.to_string()), ("users", user_ids.join(","))],
            )
            .await?;
        Ok(())
    }

    async fn list_channels(&self) -> Result<Vec<ChannelRecord>, ChatError> {
        let mut channels = Vec::new();
        let mut cursor = String::new();
        for _ in 0..MAX_LIST_PAGES {
            let mut params = vec![
                ("types", "public_channel".to_string()),
                ("exclude_archived", "false".to_string()),
                ("limit", LIST_PAGE_SIZE.to_string()),
            ];
            if !cursor.is_empty() {
                params.push(("cursor", cursor.clone()));
            }
            let page: ChannelPage = self.call(method::LIST_CHANNELS, &params).await?;
            channels.extend(page.channels);
            cursor = page
                .response_metadata
                .map(|m| m.next_cursor)
                .unwrap_or_default();
            if cursor.is_empty() {
                return Ok(channels);
            }
        }
        tracing::warn!(
            pages = MAX_LIST_PAGES,
            channels = channels.len(),
            "channel listing truncated at page limit"
        );
        Ok(channels)
    }

    async fn list_usergroups(&self) -> Result<Vec<UserGroup>, ChatError> {
        let list: UserGroupList = self.call(method::LIST_USERGROUPS, &[]).await?;
        Ok(list.usergroups)
    }

    async fn usergroup_members(&self, group_id: &str) -> Result<Vec<String>, ChatError> {
        let members: UserGroupMembers = self
            .call(method::USERGROUP_MEMBERS, &[("usergroup", group_id.to_string())])
            .await?;
        Ok(members.users)
    }
}

#[cfg(test)]
#[path = "slack_tests.rs"]
mod tests;
