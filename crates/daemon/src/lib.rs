// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Incident bot daemon library
//!
//! Configuration, message templates, authorization and the incident
//! workflow behind the slash-command HTTP endpoint.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod auth;
pub mod config;
mod env;
pub mod error;
pub mod notify;
pub mod server;
pub mod template;
pub mod workflow;

pub use auth::{AuthError, Authorizer};
pub use config::{Config, ConfigError};
pub use error::{FailureKind, WorkflowError};
pub use server::{router, AppState, SlashCommand, NOT_ALLOWED_REPLY};
pub use template::{interpolate, MessageTemplates};
pub use workflow::{IncidentOutcome, IncidentRequest, IncidentWorkflow};
