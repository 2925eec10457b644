//! `deck-server`: serves the deck registry over HTTP.
//!
//! Configure with `--api-host` or `DECK_API_HOST` (default `127.0.0.1:9000`)
//! and log verbosity with `RUST_LOG` (default `info`). `--help` prints usage.

use std::process::ExitCode;

use deck_registry::{config::Config, web};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum ServerError {
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = Config::load();

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: Config) -> Result<(), ServerError> {
    info!(config = %cfg, "startup");

    info!(status = "initialising api", "startup");
    let app = web::router(web::new_registry());
    let listener = tokio::net::TcpListener::bind(cfg.api_host).await?;

    info!(status = "api listening", host = %cfg.api_host, "startup");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(status = "complete", "shutdown");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(signal = "SIGINT", status = "initiated", "shutdown"),
        _ = terminate => info!(signal = "SIGTERM", status = "initiated", "shutdown"),
    }
}
