//! Repair engine for single-call designs.
//!
//! Fills every missing required field with a fixed default. Fields the model did
//! provide are never overwritten, and keys this module does not know about are
//! carried through untouched. After repair the design is valid by construction.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::generation::validator::ValidationError;

pub const DEFAULT_LAYOUT: &str = "vertical";
pub const DEFAULT_TONE: &str = "professional";
pub const DEFAULT_PURPOSE: &str = "content section";
pub const DEFAULT_IMAGE_INTENT: &str = "abstract";
pub const DEFAULT_COMPONENT_TYPE: &str = "Section";

/// A design exactly as the model returned it. Every field may be absent, and a
/// present field keeps whatever JSON type the model chose.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDesign {
    #[serde(default)]
    pub layout: Option<Value>,
    #[serde(default)]
    pub tone: Option<Value>,
    #[serde(default)]
    pub components: Option<Vec<RawComponent>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawComponent {
    #[serde(default, rename = "type")]
    pub component_type: Option<Value>,
    #[serde(default)]
    pub purpose: Option<Value>,
    #[serde(default)]
    pub editable: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default, rename = "imageIntent")]
    pub image_intent: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawDesign {
    /// Fails only on shapes that cannot be repaired field by field: a non-object
    /// top level, a non-list `components`, or a component that is not an object.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        if !value.is_object() {
            return Err(ValidationError::NotAnObject("a non-object value"));
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Design {
    pub layout: Value,
    pub tone: Value,
    pub components: Vec<DesignComponent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignComponent {
    #[serde(rename = "type")]
    pub component_type: Value,
    pub purpose: Value,
    pub editable: Value,
    pub content: Value,
    #[serde(rename = "imageIntent")]
    pub image_intent: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub fn repair_design(raw: RawDesign) -> Design {
    let mut repaired = 0usize;

    let layout = fill(raw.layout, || DEFAULT_LAYOUT.into(), &mut repaired);
    let tone = fill(raw.tone, || DEFAULT_TONE.into(), &mut repaired);

    let components = match raw.components {
        Some(components) if !components.is_empty() => components
            .into_iter()
            .map(|c| repair_component(c, &mut repaired))
            .collect(),
        _ => {
            repaired += 1;
            vec![default_hero()]
        }
    };

    debug!("Repaired {repaired} missing field(s) in model design");

    Design {
        layout,
        tone,
        components,
        extra: raw.extra,
    }
}

fn repair_component(raw: RawComponent, repaired: &mut usize) -> DesignComponent {
    DesignComponent {
        component_type: fill(raw.component_type, || DEFAULT_COMPONENT_TYPE.into(), repaired),
        purpose: fill(raw.purpose, || DEFAULT_PURPOSE.into(), repaired),
        editable: fill(raw.editable, || Value::Bool(true), repaired),
        content: fill(raw.content, || Value::Object(Map::new()), repaired),
        image_intent: fill(raw.image_intent, || DEFAULT_IMAGE_INTENT.into(), repaired),
        extra: raw.extra,
    }
}

/// Keeps a present value untouched; `null` counts as missing.
fn fill(field: Option<Value>, default: impl FnOnce() -> Value, repaired: &mut usize) -> Value {
    match field {
        Some(value) if !value.is_null() => value,
        _ => {
            *repaired += 1;
            default()
        }
    }
}

/// Inserted when the model produced no components at all.
pub fn default_hero() -> DesignComponent {
    DesignComponent {
        component_type: "Hero".into(),
        purpose: "Initial positioning".into(),
        editable: Value::Bool(true),
        content: json!({
            "headline": "Build Better Digital Experiences",
            "subtext": "Designed with clarity and intent"
        }),
        image_intent: "abstract, modern".into(),
        extra: Map::new(),
    }
}

/// Context-free design returned when the model call fails or its output cannot be parsed.
pub fn emergency_default() -> Design {
    Design {
        layout: Value::String(DEFAULT_LAYOUT.to_string()),
        tone: DEFAULT_TONE.into(),
        components: vec![DesignComponent {
            component_type: "Hero".into(),
            purpose: "Default fallback".into(),
            editable: Value::Bool(true),
            content: json!({
                "headline": "Professional Digital Product",
                "subtext": "High-quality default experience"
            }),
            image_intent: "abstract, clean".into(),
            extra: Map::new(),
        }],
        extra: Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repair(value: Value) -> Design {
        repair_design(RawDesign::from_value(value).unwrap())
    }

    #[test]
    fn test_empty_components_get_default_hero_and_defaults() {
        let design = repair(json!({"components": []}));
        assert_eq!(design.layout, json!("vertical"));
        assert_eq!(design.tone, "professional");
        assert_eq!(design.components, vec![default_hero()]);
    }

    #[test]
    fn test_missing_everything_is_repaired() {
        let design = repair(json!({}));
        assert_eq!(design.layout, json!(DEFAULT_LAYOUT));
        assert_eq!(design.tone, DEFAULT_TONE);
        assert_eq!(design.components.len(), 1);
        assert_eq!(design.components[0].component_type, "Hero");
    }

    #[test]
    fn test_present_fields_are_never_overwritten() {
        let design = repair(json!({
            "layout": {"type": "grid", "columns": 3},
            "tone": "playful",
            "components": [{
                "type": "Pricing",
                "purpose": "Convert visitors",
                "editable": false,
                "content": {"plans": 3},
                "imageIntent": "none"
            }]
        }));
        assert_eq!(design.layout, json!({"type": "grid", "columns": 3}));
        assert_eq!(design.tone, "playful");
        let c = &design.components[0];
        assert_eq!(c.component_type, "Pricing");
        assert_eq!(c.purpose, "Convert visitors");
        assert_eq!(c.editable, false);
        assert_eq!(c.content, json!({"plans": 3}));
        assert_eq!(c.image_intent, "none");
    }

    #[test]
    fn test_partial_component_gets_each_default() {
        let design = repair(json!({"components": [{"type": "Gallery"}]}));
        let c = &design.components[0];
        assert_eq!(c.component_type, "Gallery");
        assert_eq!(c.editable, true);
        assert_eq!(c.image_intent, DEFAULT_IMAGE_INTENT);
        assert_eq!(c.content, json!({}));
        assert_eq!(c.purpose, DEFAULT_PURPOSE);
    }

    #[test]
    fn test_null_fields_are_treated_as_missing() {
        let design = repair(json!({
            "layout": null,
            "tone": null,
            "components": [{"type": null, "content": null, "editable": null}]
        }));
        assert_eq!(design.layout, json!(DEFAULT_LAYOUT));
        assert_eq!(design.tone, DEFAULT_TONE);
        let c = &design.components[0];
        assert_eq!(c.component_type, DEFAULT_COMPONENT_TYPE);
        assert_eq!(c.content, json!({}));
        assert_eq!(c.editable, true);
    }

    #[test]
    fn test_unknown_keys_survive_repair() {
        let design = repair(json!({
            "title": "Landing",
            "components": [{"type": "Hero", "cta": "Start"}]
        }));
        assert_eq!(design.extra.get("title"), Some(&json!("Landing")));
        assert_eq!(design.components[0].extra.get("cta"), Some(&json!("Start")));

        let value = serde_json::to_value(&design).unwrap();
        assert_eq!(value["title"], "Landing");
        assert_eq!(value["components"][0]["cta"], "Start");
        assert_eq!(value["components"][0]["imageIntent"], DEFAULT_IMAGE_INTENT);
    }

    #[test]
    fn test_component_order_is_preserved() {
        let design = repair(json!({"components": [{"type": "A"}, {"type": "B"}, {"type": "C"}]}));
        let types: Vec<_> = design.components.iter().map(|c| c.component_type.as_str().unwrap()).collect();
        assert_eq!(types, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unexpected_field_types_are_kept_as_given() {
        let design = repair(json!({
            "tone": {"voice": "warm"},
            "components": [{
                "type": "Gallery",
                "editable": "yes",
                "imageIntent": ["city", "night"]
            }]
        }));
        assert_eq!(design.tone, json!({"voice": "warm"}));
        let c = &design.components[0];
        assert_eq!(c.component_type, "Gallery");
        assert_eq!(c.editable, "yes");
        assert_eq!(c.image_intent, json!(["city", "night"]));
        assert_eq!(c.purpose, DEFAULT_PURPOSE);
    }

    #[test]
    fn test_structurally_broken_designs_are_unrepairable() {
        assert!(RawDesign::from_value(json!({"components": "hero"})).is_err());
        assert!(RawDesign::from_value(json!({"components": ["hero"]})).is_err());
        assert!(RawDesign::from_value(json!(["not", "an", "object"])).is_err());
    }

    #[test]
    fn test_emergency_default_is_complete() {
        let design = emergency_default();
        assert_eq!(design.layout, json!("vertical"));
        assert_eq!(design.components.len(), 1);
        assert_eq!(design.components[0].purpose, "Default fallback");
        assert!(design.components[0].content.is_object());
    }
}
