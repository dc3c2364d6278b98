// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Incident workflow errors

use ib_adapters::ChatError;
use thiserror::Error;

/// How a failed request is reported back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Platform hiccup (dispatch failure, rate limit, timeout, 5xx)
    Transient,
    Other,
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("{step} failed: {source}")]
    Chat {
        step: &'static str,
        #[source]
        source: ChatError,
    },
    #[error("announcement channel #{0} not found")]
    AnnounceChannelNotFound(String),
}

impl WorkflowError {
    pub fn chat(step: &'static str) -> impl FnOnce(ChatError) -> Self {
        move |source| WorkflowError::Chat { step, source }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            WorkflowError::Chat { source, .. } if source.is_transient() => FailureKind::Transient,
            _ => FailureKind::Other,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
