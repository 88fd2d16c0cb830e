mod analysis;
mod config;
mod errors;
mod extract;
mod inference;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extract::PdfExtractor;
use crate::inference::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

/// The single frontend origin allowed to call this API cross-origin.
const ALLOWED_ORIGIN: &str = "https://resumiq.vercel.app";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumIQ API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize inference client
    let inference = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_model.clone());
    info!("Inference client initialized (model: {})", config.gemini_model);

    // Build app state
    let state = AppState {
        extractor: Arc::new(PdfExtractor),
        inference: Arc::new(inference),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer()?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS for the fixed frontend origin; methods and headers are unrestricted
/// for that origin.
fn cors_layer() -> Result<CorsLayer> {
    let origin: HeaderValue = ALLOWED_ORIGIN.parse()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
