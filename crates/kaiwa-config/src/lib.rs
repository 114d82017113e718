//! kaiwa configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kaiwa_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("listening on {}", config.server.bind_addr());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::KaiwaConfig;

use kaiwa_common::ConfigError;
use std::path::Path;

/// Load config from an explicit path, or from the platform default path
/// (created with commented defaults if missing) when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<KaiwaConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_path_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
        assert!(!path.exists());
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kaiwa.toml");
        std::fs::write(&path, "[server]\nport = 7000\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.server.port, 7000);
    }
}
