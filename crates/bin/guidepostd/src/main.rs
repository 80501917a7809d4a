//! # guidepostd — guidepost daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Load the one-time JSON seed snapshot (fatal if missing or malformed)
//! - Construct the in-memory repositories (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use guidepost_adapter_http_axum::state::AppState;
use guidepost_adapter_storage_memory::{
    MemoryBusinessRepository, MemoryEventRepository, seed,
};
use guidepost_app::services::business_service::BusinessService;
use guidepost_app::services::event_service::EventService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Seed snapshot — read once; mutations never write back.
    let businesses = seed::load_businesses(&config.data.businesses)?;
    let events = seed::load_events(&config.data.events)?;
    tracing::info!(
        businesses = businesses.len(),
        events = events.len(),
        "seed data loaded"
    );

    // Repositories
    let business_repo = MemoryBusinessRepository::seeded(businesses);
    let event_repo = MemoryEventRepository::seeded(events);

    // Services
    let business_service = BusinessService::new(business_repo);
    let event_service = EventService::new(event_repo);

    // HTTP
    let state = AppState::new(business_service, event_service);
    let app = guidepost_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "guidepostd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
