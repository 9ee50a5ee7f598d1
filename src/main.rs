// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;

use kraken_gateway::application::gateway_service::GatewayService;
use kraken_gateway::application::tariff_service::TariffService;
use kraken_gateway::infrastructure::config::{load_gateway_config, load_tariff_settings};
use kraken_gateway::infrastructure::kraken_client::KrakenClient;
use kraken_gateway::infrastructure::observability::init_tracing;
use kraken_gateway::presentation::router::{build_router, create_cors_layer};
use kraken_gateway::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env is optional; real deployments set the environment directly
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Initialize tracing
    init_tracing();
    tracing::debug!(dotenv_loaded, "Environment prepared");

    // Load configuration
    let config = load_gateway_config().context("Failed to load gateway configuration")?;
    let tariff_settings = load_tariff_settings().context("Failed to read tariff environment")?;

    // Create upstream transport (infrastructure layer)
    let transport = Arc::new(KrakenClient::new(
        config.upstream.url.clone(),
        config.upstream.user_agent.clone(),
    ));

    // Create services (application layer)
    let gateway_service = GatewayService::new(transport);
    let tariff_service = TariffService::new(tariff_settings);
    if let Err(e) = tariff_service.get_tariff_config() {
        tracing::warn!("/api/config will fail until fixed: {}", e);
    }

    // Create application state
    let state = Arc::new(AppState {
        gateway_service,
        tariff_service,
    });

    // Build router (presentation layer)
    let router = build_router(
        state,
        &config.server.static_dir,
        create_cors_layer(&config.cors),
    );

    // Start server
    let addr: SocketAddr = config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address {:?}", config.server.bind_address))?;
    tracing::info!(upstream = %config.upstream.url, "Starting kraken-gateway on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
