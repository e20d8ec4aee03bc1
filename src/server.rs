//! HTTP server initialization and runtime setup.
//!
//! Builds the carrier client and tracking service, then runs the Axum server
//! until Ctrl+C.

use crate::application::services::TrackingService;
use crate::config::Config;
use crate::infrastructure::soap::SoapTrackingClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client for the carrier cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client =
        SoapTrackingClient::from_config(&config).context("Failed to build tracking client")?;
    tracing::info!("Tracking client ready for {}", client.endpoint());

    let tracking_service = Arc::new(TrackingService::new(
        Arc::new(client),
        config.batch_options(),
    ));

    let state = AppState::new(tracking_service);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
