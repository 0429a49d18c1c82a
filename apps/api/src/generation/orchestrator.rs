//! Page Orchestrator — sequences model calls and guarantees a renderable result.
//!
//! One orchestrator, three resilience policies:
//!
//! - `Strict`: intent → plan → per-section copy, three chained calls. Any failure
//!   propagates to the caller. Chosen for simplicity, not resilience.
//! - `Repair`: one design call, then field-level repair. Any failure yields the
//!   context-free emergency design.
//! - `Validate`: one UI call, boolean shape check. Any failure or invalid shape
//!   discards the model output and yields the keyword-driven fallback.
//!
//! `Repair` and `Validate` never return an error. Every document carries `source`.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::generation::document::{
    LandingPage, Meta, Source, UiBody, UiDocument, UiEnvelope, UiPayload, FALLBACK_ENGINE,
    PAGE_LAYOUT,
};
use crate::generation::fallback::deterministic_fallback;
use crate::generation::intent::extract_intent;
use crate::generation::planner::plan_sections;
use crate::generation::prompts::{DESIGN_SYSTEM, USER_REQUEST_TEMPLATE, UX_SYSTEM};
use crate::generation::repair::{emergency_default, repair_design, RawDesign};
use crate::generation::sections::build_section;
use crate::generation::theme::derive_theme;
use crate::generation::validator::validate_ui;
use crate::llm_client::{CompletionModel, LlmClient, LlmError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResiliencePolicy {
    Strict,
    Repair,
    #[default]
    Validate,
}

impl ResiliencePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ResiliencePolicy::Strict => "strict",
            ResiliencePolicy::Repair => "repair",
            ResiliencePolicy::Validate => "validate",
        }
    }
}

impl fmt::Display for ResiliencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown resilience policy '{0}' (expected strict, repair or validate)")]
pub struct UnknownPolicy(String);

impl FromStr for ResiliencePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(ResiliencePolicy::Strict),
            "repair" => Ok(ResiliencePolicy::Repair),
            "validate" => Ok(ResiliencePolicy::Validate),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

/// Request-scoped pipeline driver. Holds no mutable state.
pub struct Orchestrator {
    llm: Option<Arc<dyn CompletionModel>>,
}

impl Orchestrator {
    /// `None` runs with the model disabled: every non-strict request falls back.
    pub fn new(llm: Option<Arc<dyn CompletionModel>>) -> Self {
        Self { llm }
    }

    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let llm = match &config.llm {
            Some(llm_config) => {
                let client: Arc<dyn CompletionModel> = Arc::new(LlmClient::new(llm_config.clone())?);
                Some(client)
            }
            None => None,
        };
        Ok(Self::new(llm))
    }

    pub fn model_enabled(&self) -> bool {
        self.llm.is_some()
    }

    pub fn model_name(&self) -> Option<&str> {
        self.llm.as_deref().map(|m| m.model_name())
    }

    pub async fn generate(
        &self,
        prompt: &str,
        policy: ResiliencePolicy,
    ) -> Result<UiDocument, AppError> {
        let mut rng = StdRng::from_entropy();
        self.generate_with_rng(prompt, policy, &mut rng).await
    }

    /// Same as `generate` with an injected RNG for image selection.
    pub async fn generate_with_rng<R: Rng + Send>(
        &self,
        prompt: &str,
        policy: ResiliencePolicy,
        rng: &mut R,
    ) -> Result<UiDocument, AppError> {
        let document = match policy {
            ResiliencePolicy::Strict => self.generate_strict(prompt, rng).await?,
            ResiliencePolicy::Repair => self.generate_repaired(prompt).await,
            ResiliencePolicy::Validate => self.generate_validated(prompt).await,
        };

        info!(
            "Generated UI document: policy={}, source={:?}, components={}",
            policy,
            document.source,
            document.component_count()
        );
        Ok(document)
    }

    async fn generate_strict<R: Rng + Send>(
        &self,
        prompt: &str,
        rng: &mut R,
    ) -> Result<UiDocument, AppError> {
        let llm = self.llm.as_deref().ok_or(AppError::ModelUnavailable)?;

        let intent = extract_intent(prompt, llm).await?;
        let plan = plan_sections(&intent, llm).await?;
        debug!(
            "Building {} section(s), {} needing model copy",
            plan.len(),
            plan.iter().filter(|k| k.needs_copy()).count()
        );

        let mut sections = Vec::with_capacity(plan.len());
        for kind in plan {
            sections.push(build_section(kind, &intent, llm, rng).await?);
        }

        let theme = derive_theme(&intent);
        Ok(UiDocument {
            meta: Meta::new(prompt, ai_engine(llm)),
            source: Source::Ai,
            policy: ResiliencePolicy::Strict,
            body: UiBody::LandingPage(LandingPage {
                intent,
                theme,
                layout: PAGE_LAYOUT,
                sections,
            }),
        })
    }

    async fn generate_repaired(&self, prompt: &str) -> UiDocument {
        let raw = match self.call_single(DESIGN_SYSTEM, prompt).await {
            Some(value) => RawDesign::from_value(value)
                .map_err(|e| warn!("Design response unusable, using emergency default: {e}"))
                .ok(),
            None => None,
        };

        let (design, source, engine) = match (raw, self.llm.as_deref()) {
            (Some(raw), Some(llm)) => (repair_design(raw), Source::Ai, ai_engine(llm)),
            _ => (emergency_default(), Source::Fallback, FALLBACK_ENGINE.to_string()),
        };

        UiDocument {
            meta: Meta::new(prompt, engine),
            source,
            policy: ResiliencePolicy::Repair,
            body: UiBody::Design(design),
        }
    }

    async fn generate_validated(&self, prompt: &str) -> UiDocument {
        let validated = match self.call_single(UX_SYSTEM, prompt).await {
            Some(value) => validate_ui(value)
                .map_err(|e| warn!("UI response rejected, using deterministic fallback: {e}"))
                .ok(),
            None => None,
        };

        let (ui, source, engine) = match (validated, self.llm.as_deref()) {
            (Some(ui), Some(llm)) => (UiPayload::Model(ui), Source::Ai, ai_engine(llm)),
            _ => (
                UiPayload::Fallback(deterministic_fallback(prompt)),
                Source::Fallback,
                FALLBACK_ENGINE.to_string(),
            ),
        };

        UiDocument {
            meta: Meta::new(prompt, engine),
            source,
            policy: ResiliencePolicy::Validate,
            body: UiBody::Ui(UiEnvelope { status: "ok", ui }),
        }
    }

    /// One model call for the single-call policies. `None` on any failure.
    async fn call_single(&self, system: &str, prompt: &str) -> Option<Value> {
        let Some(llm) = self.llm.as_deref() else {
            warn!("Model disabled (no API key configured), using local fallback");
            return None;
        };

        let request = USER_REQUEST_TEMPLATE.replace("{prompt}", prompt);
        match llm.call_json(&request, system).await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Model call failed, using local fallback: {e}");
                None
            }
        }
    }
}

fn ai_engine(llm: &dyn CompletionModel) -> String {
    format!("{}-ui-agent", llm.model_name())
}
