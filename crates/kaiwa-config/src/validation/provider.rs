//! Provider and persona validation.

use crate::schema::KaiwaConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Validate completion provider constraints.
pub(crate) fn validate_provider(errors: &mut Vec<String>, config: &KaiwaConfig) {
    let provider = &config.provider;
    validate_non_empty(errors, "provider.model", &provider.model);
    validate_non_empty(errors, "provider.api_key_env", &provider.api_key_env);

    if !(provider.base_url.starts_with("http://") || provider.base_url.starts_with("https://")) {
        errors.push(format!(
            "provider.base_url = {:?} must start with http:// or https://",
            provider.base_url
        ));
    }

    validate_range(
        errors,
        "provider.connect_timeout_secs",
        provider.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "provider.request_timeout_secs",
        provider.request_timeout_secs,
        1,
        600,
    );
    if let Some(temperature) = provider.temperature {
        validate_range_f64(errors, "provider.temperature", temperature, 0.0, 2.0);
    }
    if let Some(max_tokens) = provider.max_tokens {
        validate_range(errors, "provider.max_tokens", u64::from(max_tokens), 1, 131_072);
    }
}

/// The system turn must say something.
pub(crate) fn validate_persona(errors: &mut Vec<String>, config: &KaiwaConfig) {
    validate_non_empty(errors, "persona.system_prompt", &config.persona.system_prompt);
}
