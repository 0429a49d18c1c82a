//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::document::UiDocument;
use crate::generation::orchestrator::ResiliencePolicy;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Free text, passed through verbatim. Empty is allowed.
    pub prompt: String,
    /// Overrides the server's default policy for this request.
    #[serde(default)]
    pub policy: Option<ResiliencePolicy>,
}

/// Request body of the fixed-policy compatibility routes.
#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

/// POST /api/v1/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<UiDocument>, AppError> {
    let policy = request.policy.unwrap_or(state.config.default_policy);
    run(&state, &request.prompt, policy).await
}

/// POST /generate-landing-page — chained intent/plan/copy, errors propagate.
pub async fn handle_landing_page(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<UiDocument>, AppError> {
    run(&state, &request.prompt, ResiliencePolicy::Strict).await
}

/// POST /design — single call with field-level repair.
pub async fn handle_design(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<UiDocument>, AppError> {
    run(&state, &request.prompt, ResiliencePolicy::Repair).await
}

/// POST /ux — single call, validated, deterministic fallback.
pub async fn handle_ux(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<UiDocument>, AppError> {
    run(&state, &request.prompt, ResiliencePolicy::Validate).await
}

async fn run(
    state: &AppState,
    prompt: &str,
    policy: ResiliencePolicy,
) -> Result<Json<UiDocument>, AppError> {
    info!(
        "Generating UI: policy={policy}, prompt_chars={}",
        prompt.chars().count()
    );
    let document = state.orchestrator.generate(prompt, policy).await?;
    Ok(Json(document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_policy_is_optional() {
        let request: GenerateRequest = serde_json::from_str(r#"{"prompt": "hi"}"#).unwrap();
        assert!(request.policy.is_none());

        let request: GenerateRequest =
            serde_json::from_str(r#"{"prompt": "hi", "policy": "repair"}"#).unwrap();
        assert_eq!(request.policy, Some(ResiliencePolicy::Repair));
    }

    #[test]
    fn test_prompt_is_required() {
        let result: Result<PromptRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result: Result<GenerateRequest, _> =
            serde_json::from_str(r#"{"prompt": "", "policy": "yolo"}"#);
        assert!(result.is_err());
    }
}
