//! AiClient trait implementation for GroqClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Message};

use super::client::GroqClient;

#[async_trait]
impl AiClient for GroqClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages);

        debug!(model = %self.config.model, turns = messages.len(), "Groq API request");

        let response = self
            .http
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = GroqClient::describe_error_body(&text);
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AiError::Timeout
            } else {
                AiError::ParseError(e.to_string())
            }
        })?;

        self.parse_response(json)
    }
}
