//! Completion provider configuration types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default environment variable holding the provider credential.
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// OpenAI-compatible chat-completions endpoint settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Display name shown on the landing page.
    pub name: String,
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    pub model: String,
    /// Environment variable consulted first for the credential.
    pub api_key_env: String,
    /// Fallback credential when the environment variable is unset.
    pub api_key: Option<String>,
    pub max_tokens: Option<u32>,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: Option<f64>,
    /// Valid range: 1-120.
    pub connect_timeout_secs: u64,
    /// Valid range: 1-600.
    pub request_timeout_secs: u64,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key_env", &self.api_key_env)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: "groq".into(),
            base_url: "https://api.groq.com/openai/v1".into(),
            model: "qwen/qwen3-32b".into(),
            api_key_env: DEFAULT_API_KEY_ENV.into(),
            api_key: None,
            max_tokens: None,
            temperature: None,
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}

impl ProviderConfig {
    /// Resolve the credential: the configured environment variable wins,
    /// then the inline `api_key`. Blank values count as unset.
    pub fn resolve_api_key(&self) -> Option<String> {
        let from_env = std::env::var(&self.api_key_env).ok();
        Self::pick_credential(from_env, self.api_key.clone())
    }

    fn pick_credential(from_env: Option<String>, inline: Option<String>) -> Option<String> {
        [from_env, inline]
            .into_iter()
            .flatten()
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}
