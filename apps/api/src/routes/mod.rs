pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/generate", post(handlers::handle_generate))
        // Fixed-policy routes kept for existing clients
        .route(
            "/generate-landing-page",
            post(handlers::handle_landing_page),
        )
        .route("/design", post(handlers::handle_design))
        .route("/ux", post(handlers::handle_ux))
        .fallback(not_found)
        .with_state(state)
}
