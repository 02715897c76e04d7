use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use icicle::modules::time_entries::adapters::outbound::repository_in_memory::InMemoryTimeEntryRepository;
use icicle::modules::time_entries::adapters::outbound::repository_postgres::PostgresTimeEntryRepository;
use icicle::modules::time_entries::core::ports::TimeEntryRepository;
use icicle::shell::config::AppConfig;
use icicle::shell::http::router;
use icicle::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    fmt().with_env_filter(filter).init();

    let repository: Arc<dyn TimeEntryRepository> = match &config.database_url {
        Some(url) => {
            let repository =
                PostgresTimeEntryRepository::connect(url, config.database_max_connections).await?;
            repository.migrate().await?;
            tracing::info!("Using PostgreSQL time entry repository");
            Arc::new(repository)
        }
        None => {
            tracing::warn!("ICICLE_DATABASE_URL not set, keeping time entries in memory");
            Arc::new(InMemoryTimeEntryRepository::new())
        }
    };

    let state = AppState::new(config.app_name.clone(), repository);
    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!("REST endpoint: http://{}/api/time-entries", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "Failed to listen for the shutdown signal");
    }
    tracing::info!("Shutting down");
}
