//! Settings for the LLM subject generator.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default request timeout. A single attempt is made, so keep it short.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
const MODEL_ENV_VAR: &str = "COMMITWRIGHT_MODEL";
const BASE_URL_ENV_VAR: &str = "COMMITWRIGHT_LLM_BASE_URL";
const TIMEOUT_ENV_VAR: &str = "COMMITWRIGHT_LLM_TIMEOUT";

/// Explicit generator configuration. The generator never reads the
/// environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GeneratorConfig {
    /// Build a configuration from `OPENAI_API_KEY`, `COMMITWRIGHT_MODEL`,
    /// `COMMITWRIGHT_LLM_BASE_URL` and `COMMITWRIGHT_LLM_TIMEOUT` (seconds).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: non_empty_var(API_KEY_ENV_VAR),
            model: non_empty_var(MODEL_ENV_VAR).unwrap_or(defaults.model),
            base_url: non_empty_var(BASE_URL_ENV_VAR).unwrap_or(defaults.base_url),
            timeout: get_timeout(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Chat completions endpoint under the configured base URL.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read the timeout, warning on and ignoring values that are not whole
/// seconds.
fn get_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}
