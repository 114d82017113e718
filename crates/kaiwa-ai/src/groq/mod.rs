//! Groq chat-completions client.
//!
//! Implements the `AiClient` trait against Groq's OpenAI-compatible
//! endpoint (https://api.groq.com/openai/v1/chat/completions). Any other
//! OpenAI-compatible server works by changing the base URL.

mod api;
mod client;
mod config;

pub use client::GroqClient;
pub use config::GroqConfig;
