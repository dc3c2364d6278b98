// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Slash-command HTTP intake

use crate::auth::{AuthError, Authorizer};
use crate::error::FailureKind;
use crate::workflow::{IncidentRequest, IncidentWorkflow};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use ib_adapters::ChatAdapter;
use ib_core::{ChannelId, Clock};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Reply text for users outside the allow list.
pub const NOT_ALLOWED_REPLY: &str = "You are not allowed to open incidents.";

/// Form payload the chat platform posts for a slash command.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SlashCommand {
    pub token: String,
    pub channel_id: String,
    pub channel_name: String,
    pub user_id: String,
    pub user_name: String,
    pub text: String,
}

impl std::fmt::Debug for SlashCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlashCommand")
            .field("channel_id", &self.channel_id)
            .field("channel_name", &self.channel_name)
            .field("user_id", &self.user_id)
            .field("user_name", &self.user_name)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

pub struct AppState<C, K> {
    pub workflow: IncidentWorkflow<C, K>,
    pub authorizer: Authorizer,
}

impl<C: ChatAdapter, K: Clock> AppState<C, K> {
    pub fn new(workflow: IncidentWorkflow<C, K>, authorizer: Authorizer) -> Self {
        Self {
            workflow,
            authorizer,
        }
    }
}

pub fn router<C: ChatAdapter, K: Clock>(state: Arc<AppState<C, K>>) -> Router {
    Router::new()
        .route("/", post(open_incident::<C, K>))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn open_incident<C: ChatAdapter, K: Clock>(
    State(state): State<Arc<AppState<C, K>>>,
    Form(cmd): Form<SlashCommand>,
) -> Response {
    info!(
        channel_name = %cmd.channel_name,
        user_name = %cmd.user_name,
        text = %cmd.text,
        "incident requested"
    );

    if let Err(e) = state
        .authorizer
        .check(&cmd.token, &cmd.user_id, &cmd.user_name)
    {
        warn!(error = %e, "request rejected");
        return match e {
            AuthError::BadToken => (StatusCode::UNAUTHORIZED, "invalid token").into_response(),
            AuthError::NotAllowed(_) => (StatusCode::OK, NOT_ALLOWED_REPLY).into_response(),
        };
    }

    let request = IncidentRequest {
        description: cmd.text.trim().to_string(),
        user_id: cmd.user_id,
        user_name: cmd.user_name,
    };
    let err = match state.workflow.open_incident(&request).await {
        Ok(_) => return (StatusCode::OK, "Ok").into_response(),
        Err(e) => e,
    };

    let generic = state.workflow.config().templates.generic_error().to_string();
    match err.kind() {
        FailureKind::Transient => {
            error!(error = %err, "incident failed (transient)");
            (StatusCode::INTERNAL_SERVER_ERROR, generic).into_response()
        }
        FailureKind::Other => {
            error!(error = %err, "incident failed");
            let origin = ChannelId::new(cmd.channel_id);
            if let Err(e) = state.workflow.report_failure(&origin).await {
                error!(channel = %origin, error = %e, "failed to report failure");
            }
            (StatusCode::OK, "Ok").into_response()
        }
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
