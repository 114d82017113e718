//! Completion relay: validate, assemble the prompt, call the provider,
//! split the reply.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::prompt::build_prompt;
use crate::reply::{split_reply, SplitReply};
use crate::{AiClient, AiError, Message};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// No provider credential; raised before any provider call.
    #[error("{0}")]
    Configuration(String),
    /// Empty message after trimming; raised before any provider call.
    #[error("{0}")]
    Input(String),
    /// Any failure of the provider call itself. Never retried.
    #[error(transparent)]
    Provider(#[from] AiError),
}

/// Result of one successful exchange.
#[derive(Debug, Clone)]
pub struct Completion {
    /// The trimmed user message that was sent.
    pub message: String,
    /// Unmodified provider output. This is what belongs in the transcript.
    pub raw_reply: String,
    pub thinking: Option<String>,
    pub reply: Option<String>,
}

enum Backend {
    Ready(Arc<dyn AiClient>),
    Unconfigured(String),
}

pub struct CompletionRelay {
    system_prompt: String,
    backend: Backend,
}

impl CompletionRelay {
    pub fn new(system_prompt: impl Into<String>, client: Arc<dyn AiClient>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            backend: Backend::Ready(client),
        }
    }

    /// A relay with no credential. Every call fails with
    /// `RelayError::Configuration(reason)`.
    pub fn unconfigured(system_prompt: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            backend: Backend::Unconfigured(reason.into()),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.backend, Backend::Ready(_))
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Run one exchange against `history`. Does not touch any transcript;
    /// the caller appends `message` and `raw_reply` on success.
    pub async fn complete(
        &self,
        message: &str,
        history: &[Message],
    ) -> Result<Completion, RelayError> {
        let client = match &self.backend {
            Backend::Ready(client) => client,
            Backend::Unconfigured(reason) => {
                return Err(RelayError::Configuration(reason.clone()));
            }
        };

        let message = message.trim();
        if message.is_empty() {
            return Err(RelayError::Input("Empty message.".into()));
        }

        let prompt = build_prompt(&self.system_prompt, history, message);

        let started = Instant::now();
        let response = client.send_message(&prompt).await?;
        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            history_turns = history.len(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "chat completion finished"
        );

        let SplitReply { thinking, reply } = split_reply(&response.content);

        Ok(Completion {
            message: message.to_string(),
            raw_reply: response.content,
            thinking,
            reply,
        })
    }
}
