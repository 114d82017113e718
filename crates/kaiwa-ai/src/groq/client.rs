//! Groq API client struct, request building, and response parsing.

use crate::{AiError, AiResponse, Message, TokenUsage};

use super::config::GroqConfig;

/// Longest slice of an error body carried into an `AiError`.
const ERROR_BODY_LIMIT: usize = 200;

/// Groq API client.
pub struct GroqClient {
    pub(crate) config: GroqConfig,
    pub(crate) http: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build the JSON request body for the chat-completions API.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.config.model,
            "messages": messages,
        });

        if let Some(max_tokens) = self.config.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }
        if let Some(temperature) = self.config.temperature {
            body["temperature"] = serde_json::json!(temperature);
        }

        body
    }

    /// Parse a non-streaming response. The reply text must be present.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| {
                AiError::ParseError("response has no choices[0].message.content".into())
            })?;

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }

    /// Human-readable description of a non-success response body.
    /// Prefers the provider's `error.message`, else the raw body, truncated.
    pub(crate) fn describe_error_body(body: &str) -> String {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| json["error"]["message"].as_str().map(String::from))
            .unwrap_or_else(|| body.to_string());
        message.chars().take(ERROR_BODY_LIMIT).collect()
    }
}
