//! Intent extraction — classifies a free-text prompt into industry, tone, colour mode
//! and content flags. First call of the strict chain.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::generation::prompts::INTENT_PROMPT_TEMPLATE;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::CompletionModel;

/// Colour mode requested by the prompt. Drives theme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[serde(alias = "Dark", alias = "DARK")]
    Dark,
    #[default]
    #[serde(alias = "Light", alias = "LIGHT")]
    Light,
}

/// Structured interpretation of a prompt. Immutable once extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub industry: String,
    pub tone: String,
    pub mode: ColorMode,
    pub wants_trust: bool,
    pub wants_case_studies: bool,
}

/// Asks the model to classify `prompt`. Any failure propagates to the caller.
pub async fn extract_intent(prompt: &str, llm: &dyn CompletionModel) -> Result<Intent, AppError> {
    let request = INTENT_PROMPT_TEMPLATE.replace("{prompt}", prompt);
    let value = llm.call_json(&request, JSON_ONLY_SYSTEM).await?;

    let intent: Intent = serde_json::from_value(value)
        .map_err(|e| AppError::Llm(format!("Intent response did not match schema: {e}")))?;

    debug!(
        "Intent extracted: industry={}, tone={}, mode={:?}",
        intent.industry, intent.tone, intent.mode
    );
    Ok(intent)
}
