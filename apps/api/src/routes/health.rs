use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and whether the model is wired up.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "kahab-api",
        "model_enabled": state.orchestrator.model_enabled(),
        "model": state.orchestrator.model_name(),
        "default_policy": state.config.default_policy,
    }))
}
