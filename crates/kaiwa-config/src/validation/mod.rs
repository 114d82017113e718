//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod provider;
mod server;

#[cfg(test)]
mod tests;

use crate::schema::KaiwaConfig;
use kaiwa_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &KaiwaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    server::validate_server(&mut errors, config);
    provider::validate_provider(&mut errors, config);
    provider::validate_persona(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
