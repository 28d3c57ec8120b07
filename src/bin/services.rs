//! Processing services host: placeholder endpoints for the machine-learning
//! and PDF-processing capabilities the Scimus application will grow into.

use anyhow::Result;
use tracing::info;

use scimus_core::{config, logging, routes};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let _guard = logging::init_tracing(None);

    let app = routes::services_router();

    let addr = format!("0.0.0.0:{}", config::services_port());
    info!("Starting Scimus processing services on {}", addr);

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
