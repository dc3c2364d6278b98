// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use std::time::Duration;

const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Slack Web API root (default: `https://slack.com/api`).
pub fn slack_api_url() -> String {
    std::env::var("IB_SLACK_API_URL")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SLACK_API_URL.to_string())
}

/// Per-request timeout for Slack calls (default: 10000ms).
pub fn slack_timeout() -> Duration {
    parse_duration_ms("IB_SLACK_TIMEOUT_MS").unwrap_or(Duration::from_secs(10))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
