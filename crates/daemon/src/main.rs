// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Incident Bot Daemon (ibd)
//!
//! Serves the `/incident` slash command: creates a dated incident channel,
//! announces it, invites responders and links similar archived incidents.

use std::sync::Arc;

use ib_adapters::{SlackChatAdapter, TracedChat};
use ib_core::SystemClock;
use ib_daemon::{router, AppState, Authorizer, Config, IncidentWorkflow};
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "--version" | "-V" | "-v" => {
                println!("ibd {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("ibd {}", env!("CARGO_PKG_VERSION"));
                println!("Incident Bot Daemon - opens incident channels from a slash command");
                println!();
                println!("USAGE:");
                println!("    ibd");
                println!();
                println!("Configuration is read from $IB_CONFIG (default ./incident-bot.toml)");
                println!("and the environment. SLACK_BOT_TOKEN and CHANNEL_TO_POST_INCIDENT");
                println!("are required.");
                println!();
                println!("OPTIONS:");
                println!("    -h, --help       Print help information");
                println!("    -v, --version    Print version information");
                return Ok(());
            }
            _ => {
                eprintln!("error: unexpected argument '{arg}'");
                eprintln!("Usage: ibd [--help | --version]");
                std::process::exit(1);
            }
        }
    }

    let config = Arc::new(Config::load()?);
    let _log_guard = setup_logging(&config)?;
    info!(?config, "starting incident bot");

    let chat = TracedChat::new(SlackChatAdapter::new(config.bot_token.clone())?);
    let workflow = IncidentWorkflow::new(chat, SystemClock, Arc::clone(&config));
    let state = AppState::new(workflow, Authorizer::from_config(&config));
    let app = router(Arc::new(state));

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                _ = sigint.recv() => info!("Received SIGINT, shutting down..."),
            }
        })
        .await?;

    info!("stopped");
    Ok(())
}

/// Log to `config.log_path` when set, otherwise stdout. `RUST_LOG` filters
/// (default `info`).
fn setup_logging(
    config: &Config,
) -> Result<tracing_appender::non_blocking::WorkerGuard, std::io::Error> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let (non_blocking, guard) = match &config.log_path {
        Some(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => std::path::Path::new("."),
            };
            std::fs::create_dir_all(dir)?;
            let file_name = path.file_name().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("log path {} has no file name", path.display()),
                )
            })?;
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name))
        }
        None => tracing_appender::non_blocking(std::io::stdout()),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    Ok(guard)
}
