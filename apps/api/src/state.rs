use std::sync::Arc;

use crate::config::Config;
use crate::generation::orchestrator::Orchestrator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing request-scoped lives here.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    pub config: Config,
}
