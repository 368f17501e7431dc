//! TTL KV - Namespaced in-memory key-value cache server
//!
//! Serves the cache over HTTP for processes that need to share ephemeral state.

use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_kv::{create_router, AppState, Config};

/// Main entry point for the cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the table registry (with cleaners if configured)
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured host and port
/// 6. On SIGINT/SIGTERM, shut down gracefully and stop all cleaners
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_kv=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TTL KV cache server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: host={}, port={}, cleanup_interval={}ms",
        config.server_host, config.server_port, config.cleanup_interval_ms
    );

    let state = AppState::from_config(&config);
    let registry = Arc::clone(&state.registry);

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((config.server_host.as_str(), config.server_port))
        .await
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                config.server_host, config.server_port
            )
        })?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    registry.stop_all_cleaners().await;
    info!("Server shutdown complete");

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
