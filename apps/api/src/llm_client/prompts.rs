// Shared prompt fragments used by every generation prompt.
// Each policy defines its own templates in generation/prompts.rs.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Brand name injected into generated copy and reported in `meta.brand`.
pub const BRAND_NAME: &str = "Kahab";
