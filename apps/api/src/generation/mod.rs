// UI generation pipeline: intent → plan → copy → repair/validate → fallback.
// All model calls go through llm_client — no direct Gemini calls here.

pub mod assets;
pub mod document;
pub mod fallback;
pub mod handlers;
pub mod intent;
pub mod orchestrator;
pub mod planner;
pub mod prompts;
pub mod repair;
pub mod sections;
pub mod theme;
pub mod validator;
