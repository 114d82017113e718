//! kaiwa: web chat front end for an OpenAI-compatible completion API.
//!
//! Serves the landing page and `POST /chat`, keeping each browser session's
//! transcript in memory. Idle sessions are reaped in the background.

mod cli;

use std::path::PathBuf;
use std::time::Duration;

use kaiwa_ai::TranscriptStore;
use kaiwa_server::{app, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Load `KEY=value` pairs from a `.env` file into the process environment.
/// Variables already set are left alone.
fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        PathBuf::from(".env"),
        // Workspace root, two levels up from crates/kaiwa-server/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn main() -> kaiwa_common::Result<()> {
    load_dotenv();

    let args = cli::parse();

    let mut config = kaiwa_config::load_config(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let directive = args
        .log_level
        .unwrap_or_else(|| config.logging.directive());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| directive.into()))
        .init();

    tracing::info!("kaiwa v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(config))
}

async fn run(config: kaiwa_config::KaiwaConfig) -> kaiwa_common::Result<()> {
    let state = AppState::from_config(&config)?;

    spawn_reaper(
        state.transcripts.clone(),
        Duration::from_secs(config.server.session_ttl_secs),
        Duration::from_secs(config.server.reap_interval_secs),
    );

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("kaiwa listening on http://{}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn spawn_reaper(store: TranscriptStore, ttl: Duration, interval: Duration) {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            let reaped = store.reap_idle(ttl).await;
            let count = store.count().await;
            tracing::debug!(reaped, sessions = count, "Reaper tick");
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
