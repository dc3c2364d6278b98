// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message templates and `${name}` interpolation

use regex::{Captures, Regex};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Regex pattern for ${variable_name}
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("constant regex pattern is valid")
});

/// Interpolate `${name}` placeholders with values from the vars map
///
/// Single pass: substituted values are not expanded again. Unknown
/// placeholders are left as-is.
pub fn interpolate(template: &str, vars: &HashMap<&str, String>) -> String {
    VAR_PATTERN
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            vars.get(name)
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Values available to the announcement template.
#[derive(Debug, Clone)]
pub struct Announcement<'a> {
    /// Free-text description the user typed
    pub description: &'a str,
    /// Name of the created incident channel
    pub title: &'a str,
    /// Id of the created incident channel
    pub channel_id: &'a str,
    /// Requesting user's name
    pub user: &'a str,
}

/// The bot's configurable messages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageTemplates {
    /// First message in the new incident channel (`${description}`)
    pub incident_main_message: String,
    /// Posted in the announcement channel (`${description}`, `${title}`,
    /// `${channel}`, `${channel_id}`, `${user}`)
    pub announcement: String,
    /// Lists related archived incidents (`${incidents}`)
    pub related_incidents: String,
    /// Shown to the user when opening an incident fails
    pub generic_error: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            incident_main_message: "Incident opened: ${description}".to_string(),
            announcement: ":rotating_light: ${user} opened an incident: ${description}. \
                           Follow it in ${channel}."
                .to_string(),
            related_incidents: "Possibly related past incidents: ${incidents}".to_string(),
            generic_error: "Sorry, the incident could not be opened. Please try again or \
                            open the channel by hand."
                .to_string(),
        }
    }
}

impl MessageTemplates {
    pub fn main_message(&self, description: &str) -> String {
        let vars = HashMap::from([("description", description.to_string())]);
        interpolate(&self.incident_main_message, &vars)
    }

    pub fn announcement(&self, a: &Announcement<'_>) -> String {
        let vars = HashMap::from([
            ("description", a.description.to_string()),
            ("title", a.title.to_string()),
            ("channel", format!("<#{}>", a.channel_id)),
            ("channel_id", a.channel_id.to_string()),
            ("user", a.user.to_string()),
        ]);
        interpolate(&self.announcement, &vars)
    }

    /// `incidents` is the already-rendered mention list.
    pub fn related(&self, incidents: &str) -> String {
        let vars = HashMap::from([("incidents", incidents.to_string())]);
        interpolate(&self.related_incidents, &vars)
    }

    pub fn generic_error(&self) -> &str {
        &self.generic_error
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
