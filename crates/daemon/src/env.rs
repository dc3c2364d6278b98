// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate.

use std::path::PathBuf;

/// Default config file, looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "incident-bot.toml";

/// Non-empty value of an environment variable.
pub fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Config file path and whether it was given explicitly.
///
/// IB_CONFIG > ./incident-bot.toml. The default file is optional; an
/// explicit one must exist.
pub fn config_path() -> (PathBuf, bool) {
    match var("IB_CONFIG") {
        Some(path) => (PathBuf::from(path), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    }
}
