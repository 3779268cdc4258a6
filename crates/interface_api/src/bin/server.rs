//! Claims Management API Server Binary
//!
//! This binary starts the HTTP API server for the claims system.
//!
//! # Usage
//!
//! ```bash
//! # Run on the in-memory backend
//! cargo run --bin insurance-cms
//!
//! # Run on PostgreSQL
//! CMS_STORAGE_BACKEND=postgres DATABASE_URL=postgres://... cargo run --bin insurance-cms
//! ```
//!
//! # Environment Variables
//!
//! * `CMS_HOST` - Server host (default: 0.0.0.0)
//! * `CMS_PORT` / `PORT` - Server port (default: 8000)
//! * `CMS_STORAGE_BACKEND` - `memory` or `postgres` (default: memory)
//! * `CMS_DATABASE_URL` / `DATABASE_URL` - PostgreSQL connection string
//! * `CMS_DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! * `CMS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `CMS_LOG_FORMAT` - `text` or `json` (default: text)

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_claims::{ClaimsService, Stores};
use infra_db::{create_pool, postgres_stores, run_migrations, DatabaseConfig};
use interface_api::config::{ApiConfig, LogFormat, StorageBackend};
use interface_api::create_router;

/// Main entry point for the API server.
///
/// Loads configuration, initializes logging, builds the selected stores,
/// and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - Database connection or migration fails
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid configuration")?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        backend = ?config.storage_backend,
        "Starting claims management API server"
    );

    let stores = build_stores(&config).await?;
    let app = create_router(ClaimsService::new(stores), config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid server address")?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Builds the stores for the configured backend.
///
/// For PostgreSQL this connects, then applies the embedded migrations.
async fn build_stores(config: &ApiConfig) -> anyhow::Result<Stores> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            Ok(Stores::in_memory())
        }
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .clone()
                .context("database URL is required for the postgres backend")?;

            tracing::info!("Connecting to database...");
            let pool = create_pool(
                DatabaseConfig::new(url).max_connections(config.db_max_connections),
            )
            .await?;

            run_migrations(&pool).await?;
            Ok(postgres_stores(pool))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
