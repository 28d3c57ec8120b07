//! Backend API gateway for the Scimus application.

use anyhow::Result;
use tracing::info;

use scimus_core::app_state::build_app_state;
use scimus_core::domain::system::service::status_service;
use scimus_core::{config, logging, routes};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Guard must live until shutdown so file logs flush.
    let _guard = logging::init_tracing(Some("scimus-api.log"));
    status_service::mark_started();

    let state = build_app_state();
    let app = routes::app_router(state);

    let addr = format!("0.0.0.0:{}", config::api_port());
    info!("Starting Scimus API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
