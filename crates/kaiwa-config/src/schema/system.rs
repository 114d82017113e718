//! System configuration types: logging.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Level name as understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

impl LoggingConfig {
    /// Filter directive covering every kaiwa crate plus HTTP request tracing.
    pub fn directive(&self) -> String {
        let level = self.level.as_filter_str();
        format!(
            "kaiwa={level},kaiwa_server={level},kaiwa_ai={level},kaiwa_config={level},tower_http={level}"
        )
    }
}
