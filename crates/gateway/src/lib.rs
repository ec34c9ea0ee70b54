//! API Gateway Library
//!
//! This crate exposes the user service over a REST API.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use common::{AppError, AppResult};

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the application with a fresh in-memory store.
pub fn build_app() -> axum::Router {
    let (store, user_service) = user_service_lib::in_memory();
    let state = AppState::new(user_service, store);
    create_router(state).layer(TraceLayer::new_for_http())
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> AppResult<()> {
    let app = build_app();

    // Build address
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| AppError::internal(format!("Invalid address {}: {}", config.server_addr(), e)))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;
    info!("Gateway listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
