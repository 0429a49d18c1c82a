mod config;
mod errors;
mod generation;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::orchestrator::Orchestrator;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values, or a missing key with REQUIRE_LLM)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Kahab UI engine v{}", env!("CARGO_PKG_VERSION"));

    let orchestrator = Orchestrator::from_config(&config)?;
    match orchestrator.model_name() {
        Some(model) => info!("LLM client initialized (model: {model})"),
        None => warn!("GEMINI_API_KEY not set: model disabled, serving local fallbacks only"),
    }
    info!("Default resilience policy: {}", config.default_policy);

    let state = AppState {
        orchestrator: Arc::new(orchestrator),
        config: config.clone(),
    };

    // Permissive CORS matches the existing frontend; restrict origins before exposing publicly.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
