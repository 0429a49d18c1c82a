// All LLM prompt templates for the generation pipeline.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Intent extraction prompt. Replace `{prompt}` before sending.
pub const INTENT_PROMPT_TEMPLATE: &str = r#"Classify the following request for a web page.

Return a JSON object with this EXACT schema (no extra fields):
{
  "industry": "string",
  "tone": "string",
  "mode": "dark" | "light",
  "wants_trust": true | false,
  "wants_case_studies": true | false
}

User prompt:
{prompt}"#;

/// Section planning prompt. Replace `{intent_json}` before sending.
pub const PLAN_PROMPT_TEMPLATE: &str = r#"Plan the sections of a landing page for this intent.

Return ONLY a JSON array of section identifiers, in rendering order.

Allowed sections:
["hero","credibility","services","workflow","case_studies","cta"]

Intent:
{intent_json}"#;

/// Per-section copy prompt.
/// Replace: {section}, {industry}, {tone}, {brand}
pub const COPY_PROMPT_TEMPLATE: &str = r#"Generate premium landing page copy.

Return ONLY a JSON object of string fields (for example "headline", "subtext", "button").

Section: {section}
Industry: {industry}
Tone: {tone}
Brand name: {brand}"#;

/// System prompt for single-call design generation (repair policy).
pub const DESIGN_SYSTEM: &str = "You are a senior product designer and UX architect.

Your job:
- Understand the user's intent
- Decide page structure yourself
- Decide tone and visual direction
- Decide which sections are necessary
- Include image intent for each section

RULES:
- No templates
- No assumptions unless necessary
- Output ONLY valid JSON
- JSON MUST contain:
  - layout
  - tone
  - components (array, never empty)

Each component MUST include:
- type
- purpose
- editable
- content
- imageIntent";

/// System prompt for validated UI generation (validate policy).
pub const UX_SYSTEM: &str = "You are an expert UX intelligence engine.

You do NOT generate images or icons.
You do NOT assume asset libraries.

Your job:
- Understand user intent
- Decide what visual elements are needed
- Decide UX behaviors
- Describe everything abstractly and structurally

RULES:
- Output VALID JSON ONLY
- The top-level value MUST be an object with a non-empty \"sections\" array
- No markdown
- No explanations
- No assets";

/// User turn for the single-call policies. Replace `{prompt}` before sending.
pub const USER_REQUEST_TEMPLATE: &str = "USER REQUEST:\n{prompt}";
