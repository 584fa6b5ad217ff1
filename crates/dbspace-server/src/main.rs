//! dbspace REST API Server
//!
//! This binary starts the statistics API server, exposing the storage
//! utilization endpoint consumed by the terminal front end.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use dbspace_db::StatsRepository;
use dbspace_server::{create_router, AppState, AuthPolicy, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let config = ServerConfig::parse();

    if config.database_url.is_none() {
        // The server still boots; the endpoint reports the missing
        // connection string per request.
        warn!("DATABASE_URL is not configured; statistics requests will fail with 500");
    }
    if config.allowed_users.is_empty() {
        warn!("ALLOWED_USERS is empty; every statistics request will be rejected");
    }

    // No connection is opened here: the repository acquires one scoped
    // connection per request.
    let stats_repo = StatsRepository::new(config.database_url.clone());
    let auth_policy = AuthPolicy::allow_list(&config.allowed_users);

    let app_state = AppState::new(stats_repo, auth_policy);
    let app = create_router(app_state, &config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid address")?;

    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Starting dbspace API server on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
