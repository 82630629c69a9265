use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use timerboard::api::{start_http_server, ApiState};
use timerboard::config::{init_tracing, Args, ServerConfig, StorageBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServerConfig::from(Args::parse());
    let store = config
        .storage
        .open()
        .context("failed to open board store")?;
    match &config.storage {
        StorageBackend::Memory => tracing::warn!("using in-memory store, boards will not persist"),
        StorageBackend::Redb(path) => tracing::info!(path = %path.display(), "using redb store"),
    }

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let state = Arc::new(ApiState::new(store));
    let (_, server) = start_http_server(config.bind, state, shutdown_rx)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    wait_for_signal().await;
    tracing::info!("shutting down");
    let _ = shutdown_tx.send(true);
    server.await.context("HTTP server task failed")?;

    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
