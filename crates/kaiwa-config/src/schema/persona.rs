//! Conversation persona and landing-page text.

use serde::{Deserialize, Serialize};

/// Instruction sent as the system turn of every prompt.
pub const DEFAULT_SYSTEM_PROMPT: &str = concat!(
    "あなたは優しくて簡明的な相棒だ。",
    "自然に返答し、返信は要点を絞る。",
    "必ず日本語で考えてほしい。",
);

/// System instruction configuration. Set by the operator only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    pub system_prompt: String,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
        }
    }
}

/// Localized strings rendered into the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Input placeholder.
    pub please_type: String,
    /// Shown while the conversation is empty.
    pub start: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            please_type: "メッセージを入力してください。。。".into(),
            start: "会話を始めましょう".into(),
        }
    }
}
