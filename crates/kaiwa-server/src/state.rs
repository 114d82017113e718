//! Shared application state, built once at startup.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use kaiwa_ai::{CompletionRelay, GroqClient, GroqConfig, TranscriptStore};
use kaiwa_common::KaiwaError;
use kaiwa_config::schema::ServerConfig;
use kaiwa_config::KaiwaConfig;

use crate::page::LandingPage;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<CompletionRelay>,
    pub transcripts: TranscriptStore,
    pub page: Arc<LandingPage>,
    pub cookie_name: Arc<str>,
    /// Operator-supplied asset directory; `None` serves the built-in assets.
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(relay: CompletionRelay, page: LandingPage, server: &ServerConfig) -> Self {
        Self {
            relay: Arc::new(relay),
            transcripts: TranscriptStore::new(),
            page: Arc::new(page),
            cookie_name: Arc::from(server.session_cookie.as_str()),
            static_dir: server.static_dir.as_ref().map(PathBuf::from),
        }
    }

    pub fn from_config(config: &KaiwaConfig) -> kaiwa_common::Result<Self> {
        let relay = build_relay(config)?;
        let page = LandingPage::new(&config.provider, &config.page)
            .map_err(|e| KaiwaError::Template(e.to_string()))?;
        Ok(Self::new(relay, page, &config.server))
    }
}

/// Build the relay from the provider section. A missing credential is not
/// fatal: the relay is created unconfigured and every chat request reports it.
pub fn build_relay(config: &KaiwaConfig) -> kaiwa_common::Result<CompletionRelay> {
    let provider = &config.provider;
    let system_prompt = config.persona.system_prompt.clone();

    let Some(api_key) = provider.resolve_api_key() else {
        tracing::warn!(
            env = %provider.api_key_env,
            "No provider credential found; chat requests will fail until it is set"
        );
        return Ok(CompletionRelay::unconfigured(
            system_prompt,
            format!("{} env var not set.", provider.api_key_env),
        ));
    };

    let groq_config = GroqConfig::new(api_key)
        .with_base_url(&provider.base_url)
        .with_model(&provider.model)
        .with_max_tokens(provider.max_tokens)
        .with_temperature(provider.temperature)
        .with_timeouts(
            Duration::from_secs(provider.connect_timeout_secs),
            Duration::from_secs(provider.request_timeout_secs),
        );
    let client = GroqClient::new(groq_config).map_err(|e| KaiwaError::Provider(e.to_string()))?;
    tracing::info!(provider = %provider.name, model = %client.model(), "Completion provider ready");

    Ok(CompletionRelay::new(system_prompt, Arc::new(client)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(api_key_env: &str, api_key: Option<&str>) -> KaiwaConfig {
        let mut config = KaiwaConfig::default();
        config.provider.api_key_env = api_key_env.into();
        config.provider.api_key = api_key.map(String::from);
        config
    }

    #[test]
    fn missing_credential_builds_unconfigured_relay() {
        let config = config_with_key("KAIWA_TEST_UNSET_KEY_7F3A", None);
        let relay = build_relay(&config).unwrap();
        assert!(!relay.is_configured());
    }

    #[test]
    fn inline_credential_builds_ready_relay() {
        let config = config_with_key("KAIWA_TEST_UNSET_KEY_9C1B", Some("gsk_inline"));
        let relay = build_relay(&config).unwrap();
        assert!(relay.is_configured());
        assert_eq!(relay.system_prompt(), config.persona.system_prompt);
    }

    #[test]
    fn state_uses_configured_cookie_name() {
        let mut config = config_with_key("KAIWA_TEST_UNSET_KEY_2D4E", None);
        config.server.session_cookie = "sid".into();
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(&*state.cookie_name, "sid");
        assert!(state.static_dir.is_none());
    }
}
