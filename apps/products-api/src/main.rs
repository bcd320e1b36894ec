//! Products API - furniture catalog REST server

use axum::Router;
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Full application router: documented API under `/api` plus health probes.
fn build_app(state: &AppState) -> std::io::Result<Router> {
    let api_routes = api::routes(state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.cors_allowed_origins)?;

    Ok(router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone())))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);
    let app = build_app(&state)?;
    let products = state.products.count_products().await?;

    info!(
        products,
        seeded = state.config.seed_catalog,
        "Starting Products API on port {}",
        state.config.server.port
    );

    create_production_app(
        app,
        &state.config.server,
        state.config.shutdown_timeout,
        async move {
            info!("Shutting down: in-memory catalog is discarded");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
