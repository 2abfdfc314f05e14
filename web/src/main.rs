//! Listkeeper Server
//!
//! Serves session-scoped todo lists over HTTP.
//!
//! # Usage
//!
//! ```bash
//! LISTKEEPER_PORT=4567 cargo run --bin listkeeper
//! ```
//!
//! All settings come from `LISTKEEPER_*` environment variables (a `.env`
//! file is honoured); see [`listkeeper_web::Config`].

use anyhow::Context;
use listkeeper_web::{build_router, metrics, views::Views, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        secure_cookies = config.session.secure_cookies,
        session_idle_secs = config.session.idle_timeout_secs,
        "Configuration loaded"
    );

    let views = Views::new().map_err(|e| anyhow::anyhow!("templates failed to compile: {e}"))?;
    let mut state = AppState::new(views, config.session);

    if config.server.metrics_enabled {
        let handle = metrics::install_recorder()?;
        state = state.with_metrics(handle);
        tracing::info!("Metrics available at /metrics");
    }

    let addr = config.bind_addr().context("invalid LISTKEEPER_HOST/LISTKEEPER_PORT")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "Listkeeper is running");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down gracefully");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutting down gracefully...");
}
