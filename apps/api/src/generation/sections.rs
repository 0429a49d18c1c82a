//! Landing-page sections for the strict chain.
//!
//! Only hero, case studies and CTA cost a model call. Credibility, services and
//! workflow are filled from static content.

use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::generation::assets::pick_image;
use crate::generation::intent::Intent;
use crate::generation::planner::SectionKind;
use crate::generation::prompts::COPY_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{BRAND_NAME, JSON_ONLY_SYSTEM};
use crate::llm_client::CompletionModel;

/// Model-written copy for one section, e.g. `{"headline": ..., "subtext": ...}`.
pub type CopyBlock = Map<String, Value>;

const CREDIBILITY_STATS: [&str; 3] = [
    "AI-first engineering",
    "Production-grade systems",
    "Trusted expertise",
];

const SERVICE_ITEMS: [&str; 4] = [
    "AI Model Development",
    "Machine Learning Systems",
    "UI/UX Engineering",
    "Custom AI Solutions",
];

const WORKFLOW_STEPS: [&str; 4] = ["Discovery", "Design", "Build", "Deploy"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    Hero { content: CopyBlock, image: String },
    Credibility { stats: Vec<String> },
    Services { items: Vec<String> },
    Workflow { steps: Vec<String> },
    CaseStudies { examples: CopyBlock },
    Cta { content: CopyBlock },
}

/// Asks the model for the copy of a single section.
pub async fn generate_copy(
    kind: SectionKind,
    intent: &Intent,
    llm: &dyn CompletionModel,
) -> Result<CopyBlock, AppError> {
    let request = COPY_PROMPT_TEMPLATE
        .replace("{section}", kind.as_str())
        .replace("{brand}", BRAND_NAME)
        .replace("{tone}", &intent.tone)
        .replace("{industry}", &intent.industry);

    match llm.call_json(&request, JSON_ONLY_SYSTEM).await? {
        Value::Object(copy) => Ok(copy),
        other => Err(AppError::Llm(format!(
            "Copy for section '{kind}' was not a JSON object: {}",
            type_name(&other)
        ))),
    }
}

/// Builds one section, calling the model only for kinds that need copy.
pub async fn build_section<R: Rng + Send + ?Sized>(
    kind: SectionKind,
    intent: &Intent,
    llm: &dyn CompletionModel,
    rng: &mut R,
) -> Result<Section, AppError> {
    let section = match kind {
        SectionKind::Hero => {
            let content = generate_copy(kind, intent, llm).await?;
            Section::Hero {
                content,
                image: pick_image(rng).to_string(),
            }
        }
        SectionKind::Credibility => Section::Credibility {
            stats: to_strings(&CREDIBILITY_STATS),
        },
        SectionKind::Services => Section::Services {
            items: to_strings(&SERVICE_ITEMS),
        },
        SectionKind::Workflow => Section::Workflow {
            steps: to_strings(&WORKFLOW_STEPS),
        },
        SectionKind::CaseStudies => Section::CaseStudies {
            examples: generate_copy(kind, intent, llm).await?,
        },
        SectionKind::Cta => Section::Cta {
            content: generate_copy(kind, intent, llm).await?,
        },
    };
    Ok(section)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_section_serializes_with_snake_case_tag() {
        let section = Section::CaseStudies {
            examples: json!({"project_1": "Fraud detection"})
                .as_object()
                .cloned()
                .unwrap(),
        };
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["type"], "case_studies");
        assert_eq!(value["examples"]["project_1"], "Fraud detection");
    }

    #[test]
    fn test_static_sections_have_fixed_content() {
        let value = serde_json::to_value(Section::Workflow {
            steps: to_strings(&WORKFLOW_STEPS),
        })
        .unwrap();
        assert_eq!(value, json!({"type": "workflow", "steps": ["Discovery", "Design", "Build", "Deploy"]}));
    }

    #[test]
    fn test_type_name_covers_scalars() {
        assert_eq!(type_name(&json!("x")), "string");
        assert_eq!(type_name(&json!([1])), "array");
        assert_eq!(type_name(&Value::Null), "null");
    }
}
