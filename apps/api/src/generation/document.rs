//! The UI document returned to callers. Built once per request, never mutated after.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::generation::fallback::DashboardUi;
use crate::generation::intent::Intent;
use crate::generation::orchestrator::ResiliencePolicy;
use crate::generation::repair::Design;
use crate::generation::sections::Section;
use crate::generation::theme::Theme;
use crate::llm_client::prompts::BRAND_NAME;

/// Engine identifier reported when no model output was used.
pub const FALLBACK_ENGINE: &str = "kahab-local-fallback";

/// Whether the body came from the model or from local fallback logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Ai,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub engine: String,
    pub brand: &'static str,
    /// BLAKE3 hex digest of the raw prompt.
    pub hash: String,
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
}

impl Meta {
    pub fn new(prompt: &str, engine: String) -> Self {
        Self {
            engine,
            brand: BRAND_NAME,
            hash: prompt_hash(prompt),
            request_id: Uuid::new_v4(),
            generated_at: Utc::now(),
        }
    }
}

pub fn prompt_hash(prompt: &str) -> String {
    blake3::hash(prompt.as_bytes()).to_hex().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    pub max_width: u32,
    pub grid: &'static str,
}

pub const PAGE_LAYOUT: PageLayout = PageLayout {
    max_width: 1200,
    grid: "12-column",
};

#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub intent: Intent,
    pub theme: Theme,
    pub layout: PageLayout,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UiEnvelope {
    pub status: &'static str,
    pub ui: UiPayload,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UiPayload {
    Model(Map<String, Value>),
    Fallback(DashboardUi),
}

/// Policy-specific body, flattened next to `meta` and `source`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UiBody {
    LandingPage(LandingPage),
    Design(Design),
    Ui(UiEnvelope),
}

#[derive(Debug, Clone, Serialize)]
pub struct UiDocument {
    pub meta: Meta,
    pub source: Source,
    pub policy: ResiliencePolicy,
    #[serde(flatten)]
    pub body: UiBody,
}

impl UiDocument {
    /// Number of top-level sections/components. Always at least one.
    pub fn component_count(&self) -> usize {
        match &self.body {
            UiBody::LandingPage(page) => page.sections.len(),
            UiBody::Design(design) => design.components.len(),
            UiBody::Ui(envelope) => match &envelope.ui {
                UiPayload::Model(ui) => ui
                    .get("sections")
                    .and_then(Value::as_array)
                    .map_or(0, Vec::len),
                UiPayload::Fallback(ui) => ui.components.len(),
            },
        }
    }
}
