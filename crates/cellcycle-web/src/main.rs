//! CellCycleDB API Server
//!
//! Run with: cargo run -p cellcycle-web

use cellcycle_db::Database;
use cellcycle_web::{config::Config, router::build_router, state::AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cellcycle=debug,tower_http=info,info")),
        )
        .init();

    info!("Starting CellCycleDB API server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!("Could not load cellcycle.toml: {e}");
            warn!("Continuing with built-in defaults.");
            Config::default()
        }
    }
    .with_env_overrides();

    info!("Connecting to PostgreSQL...");
    let db = Database::connect(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    info!("Database connected.");

    info!("Serving report resources from {}", config.resources.root);
    let state = AppState::from_config(&config, db);
    let app = build_router(state);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
