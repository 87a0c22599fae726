//! Terminology browser server entry point.

use anyhow::Context;
use backend::{server_extra::{AppState, router}, settings::Settings};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;
    info!("Using terminology API at {}", settings.api.base_url);

    let state = AppState::new(&settings)?;
    let listener = tokio::net::TcpListener::bind(&settings.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind_address))?;
    info!("Listening on {}", settings.bind_address);

    axum::serve(listener, router(state)).await.context("Server error")?;
    Ok(())
}
