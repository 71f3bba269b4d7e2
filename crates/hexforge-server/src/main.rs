//! HEXFORGE Encounter Engine HTTP Server
//!
//! Provides the REST API for generating random monster encounters.

use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hexforge_generator::EncounterGenerator;
use hexforge_server::api;
use hexforge_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    // Load configuration
    let config = ServerConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    // Build the encounter engine with its builtin catalogs
    let generator = EncounterGenerator::new();
    info!(
        "Encounter generator initialized: {} mob sets, {} environment sets",
        generator.mob_sets().len(),
        generator.environment_sets().len()
    );

    // Create router
    let app = api::rest::create_router(Arc::new(generator), &config.allowed_origins);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Mob sets: http://{}/mob_set_names", addr);
    info!("  Environment sets: http://{}/environment_set_names", addr);
    info!("  Generate encounter: POST http://{}/encounter", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "hexforge_server=info,hexforge_generator=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
