//! Conversation engine for kaiwa.
//!
//! Provides:
//! - An OpenAI-compatible chat-completions client (Groq by default)
//! - Prompt assembly from a fixed system instruction and a transcript
//! - `<think>` reply splitting
//! - The completion relay tying those together
//! - A per-session transcript store

pub mod groq;
pub mod prompt;
pub mod relay;
pub mod reply;
pub mod transcript;

use async_trait::async_trait;

pub use groq::{GroqClient, GroqConfig};
pub use prompt::build_prompt;
pub use relay::{Completion, CompletionRelay, RelayError};
pub use reply::{split_reply, SplitReply};
pub use transcript::TranscriptStore;

#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send a full prompt and wait for the complete reply.
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

/// One conversation turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}
