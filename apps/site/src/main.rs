mod config;
mod errors;
mod models;
mod pages;
mod paths;
mod render;
mod routes;
mod source;
mod state;
mod templates;

use anyhow::{anyhow, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::source::{DocumentSource, FsSource, HttpSource};
use crate::state::AppState;
use crate::templates::Templates;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume site v{}", env!("CARGO_PKG_VERSION"));

    let source = build_source(&config);
    info!("Serving documents from {}", source.describe());

    let templates =
        Templates::new().map_err(|e| anyhow!("Failed to compile page templates: {e}"))?;

    let state = AppState {
        source,
        templates: Arc::new(templates),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the HTTP origin when `DATA_BASE_URL` is set, the data directory otherwise.
fn build_source(config: &Config) -> Arc<dyn DocumentSource> {
    match &config.data_base_url {
        Some(base) => Arc::new(HttpSource::new(base.clone())),
        None => Arc::new(FsSource::new(config.data_dir.clone())),
    }
}
