//! Kalyndr API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use kalyndr_api::app;
use kalyndr_api::config::Config;
use kalyndr_api::error::AppError;
use kalyndr_api::state::AppState;
use kalyndr_event_store::PgEventStore;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Kalyndr API server");

    // Read configuration from the environment; missing values abort startup.
    let config = Config::from_env().inspect_err(|e| tracing::error!("{e}"))?;

    // Create database connection pool. Single attempt, fail fast.
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url())
        .await?;

    let store = PgEventStore::new(pool, &config.events_table)?;
    store.ensure_schema().await?;

    let app = app(AppState::new(Arc::new(store)));

    // Start server.
    let addr: SocketAddr = format!("{}:{}", config.listen_host, config.listen_port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!(table = %config.events_table, "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
