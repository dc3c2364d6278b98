// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Slash-command authorization

use crate::config::Config;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("verification token mismatch")]
    BadToken,
    #[error("user {0} may not open incidents")]
    NotAllowed(String),
}

/// Checks the command's verification token and the requesting user.
#[derive(Debug, Clone, Default)]
pub struct Authorizer {
    verification_token: Option<String>,
    allowed_users: Vec<String>,
}

impl Authorizer {
    pub fn new(verification_token: Option<String>, allowed_users: Vec<String>) -> Self {
        Self {
            verification_token,
            allowed_users,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.verification_token.clone(),
            config.allowed_users.clone(),
        )
    }

    /// An unset verification token skips the token check; an empty allow
    /// list admits everyone. Users match by id or by name.
    pub fn check(&self, token: &str, user_id: &str, user_name: &str) -> Result<(), AuthError> {
        if let Some(expected) = &self.verification_token {
            if expected != token {
                return Err(AuthError::BadToken);
            }
        }
        if self.allowed_users.is_empty()
            || self
                .allowed_users
                .iter()
                .any(|u| u == user_id || u == user_name)
        {
            Ok(())
        } else {
            let who = if user_name.is_empty() { user_id } else { user_name };
            Err(AuthError::NotAllowed(who.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
