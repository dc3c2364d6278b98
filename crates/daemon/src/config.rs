// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bot configuration: optional TOML file, then environment overrides.

use crate::env;
use crate::template::MessageTemplates;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// On-disk shape. Every field is optional so env vars can fill the gaps.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    slack_bot_token: Option<String>,
    bind_host: Option<String>,
    port: Option<u16>,
    log_path: Option<PathBuf>,
    announce_channel: Option<String>,
    groups_to_invite: Vec<String>,
    verification_token: Option<String>,
    allowed_users: Vec<String>,
    templates: MessageTemplates,
}

/// Immutable bot configuration, built once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub bot_token: String,
    pub bind_host: String,
    pub port: u16,
    /// Log file; stdout when unset
    pub log_path: Option<PathBuf>,
    /// Channel (by name) where new incidents are announced
    pub announce_channel: String,
    /// User groups (name or handle) invited into every incident channel
    pub groups_to_invite: Vec<String>,
    /// Slash-command verification token; unchecked when unset
    pub verification_token: Option<String>,
    /// User ids or names allowed to open incidents; empty admits everyone
    pub allowed_users: Vec<String>,
    pub templates: MessageTemplates,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind_host", &self.bind_host)
            .field("port", &self.port)
            .field("log_path", &self.log_path)
            .field("announce_channel", &self.announce_channel)
            .field("groups_to_invite", &self.groups_to_invite)
            .field("verification_token", &self.verification_token.as_ref().map(|_| "***"))
            .field("allowed_users", &self.allowed_users)
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Load from the config file (if any) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let (path, explicit) = env::config_path();
        let file = if explicit || path.exists() {
            Some(path.as_path())
        } else {
            None
        };
        Self::from_sources(file, env::var)
    }

    /// Build from an optional TOML file and an env lookup; env wins.
    pub fn from_sources(
        file: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = match file {
            Some(path) => read_file(path)?,
            None => FileConfig::default(),
        };
        Self::merge(file, lookup)
    }

    fn merge(
        file: FileConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let bot_token = lookup("SLACK_BOT_TOKEN")
            .or(file.slack_bot_token)
            .ok_or(ConfigError::Missing("SLACK_BOT_TOKEN"))?;
        let announce_channel = lookup("CHANNEL_TO_POST_INCIDENT")
            .or(file.announce_channel)
            .map(|c| c.trim_start_matches('#').to_string())
            .filter(|c| !c.is_empty())
            .ok_or(ConfigError::Missing("CHANNEL_TO_POST_INCIDENT"))?;
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value })?,
            None => file.port.unwrap_or(DEFAULT_PORT),
        };

        let mut templates = file.templates;
        let overrides = [
            ("INCIDENT_MAIN_MESSAGE", &mut templates.incident_main_message),
            ("RESPONSE_TEMPLATE", &mut templates.announcement),
            (
                "RESPONSE_LIST_OF_INCIDENTS_TEMPLATE",
                &mut templates.related_incidents,
            ),
            ("GENERIC_ERROR_MESSAGE", &mut templates.generic_error),
        ];
        for (var, slot) in overrides {
            if let Some(value) = lookup(var) {
                *slot = value;
            }
        }

        Ok(Self {
            bot_token,
            bind_host: lookup("IB_BIND_HOST")
                .or(file.bind_host)
                .unwrap_or_else(|| DEFAULT_BIND_HOST.to_string()),
            port,
            log_path: lookup("IB_LOG_PATH").map(PathBuf::from).or(file.log_path),
            announce_channel,
            groups_to_invite: lookup("GROUPS_TO_INVITE")
                .map(|v| split_list(&v))
                .unwrap_or(file.groups_to_invite),
            verification_token: lookup("SLACK_VERIFICATION_TOKEN").or(file.verification_token),
            allowed_users: lookup("ALLOWED_USERS")
                .map(|v| split_list(&v))
                .unwrap_or(file.allowed_users),
            templates,
        })
    }

    /// `host:port` to listen on.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Comma-separated list; entries trimmed, empties dropped.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
