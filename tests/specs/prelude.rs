//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL: seed a fake chat workspace, start the bot's
//! router against it, send slash commands.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use ib_adapters::{ChatAdapter, FakeChatAdapter, UserGroup};
use ib_core::{ChannelId, FakeClock};
use ib_daemon::{router, AppState, Authorizer, Config, IncidentWorkflow, MessageTemplates};
use tower::ServiceExt;

pub use ib_adapters::{method, ChatCall, ChatError};

/// Name of the announcement channel every workspace starts with.
pub const ANNOUNCE: &str = "downtime";
/// Channel the slash command is typed in.
pub const REQUEST_CHANNEL: &str = "CREQ";
pub const GENERIC_ERROR: &str = "Could not open the incident, try again";

pub fn bot() -> BotBuilder {
    BotBuilder::default()
}

pub struct BotBuilder {
    chat: FakeChatAdapter,
    today: NaiveDate,
    groups: Vec<String>,
    verification_token: Option<String>,
    allowed_users: Vec<String>,
}

impl Default for BotBuilder {
    fn default() -> Self {
        Self {
            chat: FakeChatAdapter::new()
                .with_channel("CDOWN", ANNOUNCE, false)
                .with_channel(REQUEST_CHANNEL, "dev-chat", false),
            today: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            groups: vec![],
            verification_token: None,
            allowed_users: vec![],
        }
    }
}

impl BotBuilder {
    pub fn archived(mut self, id: &str, name: &str) -> Self {
        self.chat = self.chat.with_channel(id, name, true);
        self
    }

    pub fn live(mut self, id: &str, name: &str) -> Self {
        self.chat = self.chat.with_channel(id, name, false);
        self
    }

    pub fn today(mut self, y: i32, m: u32, d: u32) -> Self {
        self.today = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        self
    }

    /// Seed a user group and configure it to be invited.
    pub fn responders(mut self, handle: &str, members: &[&str]) -> Self {
        let id = format!("S{}", self.groups.len() + 1);
        self.chat
            .add_usergroup(UserGroup::new(id, handle.to_uppercase(), handle), members);
        self.groups.push(handle.to_string());
        self
    }

    pub fn verification_token(mut self, token: &str) -> Self {
        self.verification_token = Some(token.to_string());
        self
    }

    pub fn allow(mut self, user: &str) -> Self {
        self.allowed_users.push(user.to_string());
        self
    }

    pub fn start(self) -> Bot {
        let config = Config {
            bot_token: "xoxb-spec".to_string(),
            bind_host: "127.0.0.1".to_string(),
            port: 0,
            log_path: None,
            announce_channel: ANNOUNCE.to_string(),
            groups_to_invite: self.groups,
            verification_token: self.verification_token,
            allowed_users: self.allowed_users,
            templates: MessageTemplates {
                incident_main_message: "Incident: ${description}".to_string(),
                announcement: "${user} opened ${channel}".to_string(),
                related_incidents: "Related: ${incidents}".to_string(),
                generic_error: GENERIC_ERROR.to_string(),
            },
        };
        let authorizer = Authorizer::from_config(&config);
        let clock = FakeClock::new(self.today);
        let workflow = IncidentWorkflow::new(self.chat.clone(), clock.clone(), Arc::new(config));
        Bot {
            chat: self.chat,
            clock,
            router: router(Arc::new(AppState::new(workflow, authorizer))),
        }
    }
}

pub struct Bot {
    pub chat: FakeChatAdapter,
    clock: FakeClock,
    router: Router,
}

pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Bot {
    /// `/incident <text>` typed by alice in the request channel.
    pub async fn incident(&self, text: &str) -> Reply {
        self.command(&[("text", text)]).await
    }

    /// Slash command with default fields overridden by `fields`.
    pub async fn command(&self, fields: &[(&str, &str)]) -> Reply {
        let mut form = vec![
            ("token", ""),
            ("channel_id", REQUEST_CHANNEL),
            ("channel_name", "dev-chat"),
            ("user_id", "U1"),
            ("user_name", "alice"),
            ("text", ""),
        ];
        for (key, value) in fields {
            match form.iter_mut().find(|(k, _)| k == key) {
                Some(slot) => slot.1 = *value,
                None => form.push((*key, *value)),
            }
        }
        let body = form
            .iter()
            .map(|(k, v)| format!("{k}={}", encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        Reply {
            status,
            body: String::from_utf8_lossy(&bytes).to_string(),
        }
    }

    /// Move the bot's calendar to another day.
    pub fn set_today(&self, y: i32, m: u32, d: u32) {
        self.clock.set(NaiveDate::from_ymd_opt(y, m, d).unwrap());
    }

    pub fn messages_in(&self, id: &str) -> Vec<String> {
        self.chat.messages_in(&ChannelId::new(id))
    }

    pub fn channel(&self, name: &str) -> Option<ChannelId> {
        self.chat.channel_id(name)
    }

    pub async fn listing_names(&self) -> Vec<String> {
        self.chat
            .list_channels()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect()
    }
}

/// Minimal form encoding for test inputs.
fn encode(value: &str) -> String {
    let mut out = String::new();
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
