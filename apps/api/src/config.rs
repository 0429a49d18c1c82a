use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::generation::orchestrator::ResiliencePolicy;

const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Settings for the upstream Gemini client. Only present when an API key is configured.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
    pub temperature: f32,
    /// Extra attempts on network errors, 429 and 5xx. 0 means a single attempt.
    pub max_retries: u32,
}

/// Application configuration loaded from environment variables.
///
/// A missing `GEMINI_API_KEY` soft-disables the model: `repair` and `validate`
/// requests always take the local fallback, `strict` requests fail.
/// Set `REQUIRE_LLM=true` to make a missing key fatal at startup instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: Option<LlmConfig>,
    pub default_policy: ResiliencePolicy,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env = Env(lookup);

        let api_key = env.optional("GEMINI_API_KEY").or_else(|| env.optional("GOOGLE_API_KEY"));
        let require_llm = env.parse("REQUIRE_LLM", false)?;

        let llm = match api_key {
            Some(api_key) => Some(LlmConfig {
                api_key,
                api_url: env
                    .optional("GEMINI_API_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
                model: env
                    .optional("GEMINI_MODEL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                timeout: Duration::from_secs(env.parse("LLM_TIMEOUT_SECS", 30u64)?),
                temperature: env.parse("LLM_TEMPERATURE", 0.3f32)?,
                max_retries: env.parse("LLM_MAX_RETRIES", 0u32)?,
            }),
            None if require_llm => {
                bail!("Required environment variable 'GEMINI_API_KEY' is not set (REQUIRE_LLM=true)")
            }
            None => None,
        };

        let default_policy = match env.optional("DEFAULT_POLICY") {
            Some(raw) => raw
                .parse::<ResiliencePolicy>()
                .with_context(|| format!("DEFAULT_POLICY '{raw}' is not a known policy"))?,
            None => ResiliencePolicy::Validate,
        };

        Ok(Config {
            llm,
            default_policy,
            port: env.parse("PORT", 8080u16)?,
            rust_log: env.optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    fn parse<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match self.optional(key) {
            Some(raw) => raw.trim().parse::<T>().with_context(|| {
                format!("Environment variable '{key}' has an invalid value '{raw}'")
            }),
            None => Ok(default),
        }
    }
}
