//! Section planning — turns an `Intent` into an ordered list of section kinds.
//!
//! The model's list is untrusted: unknown identifiers are dropped and repeats are
//! removed keeping the first occurrence, so a plan never exceeds `SectionKind::ALL.len()`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::generation::intent::Intent;
use crate::generation::prompts::PLAN_PROMPT_TEMPLATE;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::CompletionModel;

/// The fixed set of landing-page sections the planner may choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    Credibility,
    Services,
    Workflow,
    CaseStudies,
    Cta,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Hero,
        SectionKind::Credibility,
        SectionKind::Services,
        SectionKind::Workflow,
        SectionKind::CaseStudies,
        SectionKind::Cta,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Credibility => "credibility",
            SectionKind::Services => "services",
            SectionKind::Workflow => "workflow",
            SectionKind::CaseStudies => "case_studies",
            SectionKind::Cta => "cta",
        }
    }

    /// Lenient lookup: trims, lowercases, and treats `-`/space like `_`.
    pub fn parse(raw: &str) -> Option<SectionKind> {
        let normalized = raw.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL.into_iter().find(|k| k.as_str() == normalized)
    }

    /// Whether content for this section comes from a model call.
    pub fn needs_copy(self) -> bool {
        matches!(
            self,
            SectionKind::Hero | SectionKind::CaseStudies | SectionKind::Cta
        )
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts both `["hero", ...]` and `{"sections": ["hero", ...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlanResponse {
    List(Vec<Value>),
    Wrapped { sections: Vec<Value> },
}

/// Asks the model for a section plan conditioned on `intent`.
pub async fn plan_sections(
    intent: &Intent,
    llm: &dyn CompletionModel,
) -> Result<Vec<SectionKind>, AppError> {
    let intent_json = serde_json::to_string(intent)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize intent: {e}")))?;
    let request = PLAN_PROMPT_TEMPLATE.replace("{intent_json}", &intent_json);

    let value = llm.call_json(&request, JSON_ONLY_SYSTEM).await?;
    let raw = match serde_json::from_value::<PlanResponse>(value) {
        Ok(PlanResponse::List(items)) | Ok(PlanResponse::Wrapped { sections: items }) => items,
        Err(e) => {
            return Err(AppError::Llm(format!(
                "Plan response was not a list of sections: {e}"
            )))
        }
    };

    let plan = normalize_plan(&raw);
    if plan.is_empty() {
        return Err(AppError::Llm(
            "Plan response contained no known sections".to_string(),
        ));
    }

    debug!("Planned sections: {:?}", plan);
    Ok(plan)
}

/// Keeps known section identifiers in order, dropping unknowns and repeats.
pub fn normalize_plan(raw: &[Value]) -> Vec<SectionKind> {
    let mut plan: Vec<SectionKind> = Vec::with_capacity(SectionKind::ALL.len());
    for item in raw {
        let Some(kind) = item.as_str().and_then(SectionKind::parse) else {
            warn!("Dropping unknown section in plan: {item}");
            continue;
        };
        if plan.contains(&kind) {
            warn!("Dropping repeated section in plan: {kind}");
            continue;
        }
        plan.push(kind);
    }
    plan
}
