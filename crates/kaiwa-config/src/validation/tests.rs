//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = KaiwaConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_port_zero() {
    let mut config = KaiwaConfig::default();
    config.server.port = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.port"));
}

#[test]
fn catches_session_ttl_too_short() {
    let mut config = KaiwaConfig::default();
    config.server.session_ttl_secs = 5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.session_ttl_secs"));
}

#[test]
fn catches_bad_cookie_name() {
    let mut config = KaiwaConfig::default();
    config.server.session_cookie = "kaiwa session;".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.session_cookie"));
}

#[test]
fn catches_blank_static_dir() {
    let mut config = KaiwaConfig::default();
    config.server.static_dir = Some(" ".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.static_dir must not be empty"));
}

#[test]
fn catches_empty_model() {
    let mut config = KaiwaConfig::default();
    config.provider.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.model must not be empty"));
}

#[test]
fn catches_non_http_base_url() {
    let mut config = KaiwaConfig::default();
    config.provider.base_url = "api.groq.com/openai/v1".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.base_url"));
}

#[test]
fn catches_request_timeout_out_of_range() {
    let mut config = KaiwaConfig::default();
    config.provider.request_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.request_timeout_secs"));
}

#[test]
fn temperature_only_checked_when_set() {
    let mut config = KaiwaConfig::default();
    config.provider.temperature = None;
    assert!(validate(&config).is_ok());

    config.provider.temperature = Some(3.5);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.temperature"));
}

#[test]
fn catches_empty_system_prompt() {
    let mut config = KaiwaConfig::default();
    config.persona.system_prompt = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("persona.system_prompt"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = KaiwaConfig::default();
    config.server.port = 0;
    config.provider.model = String::new();
    let err = validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    let msg = err.to_string();
    assert!(msg.contains("server.port"));
    assert!(msg.contains("provider.model"));
    assert!(msg.contains("; "));
}
