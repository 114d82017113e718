//! HTTP server and session configuration types.

use serde::{Deserialize, Serialize};

/// Listener, static assets, and session cookie settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`. When unset, the assets built into
    /// the binary are served.
    pub static_dir: Option<String>,
    /// Name of the cookie carrying the session id.
    pub session_cookie: String,
    /// Idle time after which a session's transcript is dropped (valid range: 60-2592000).
    pub session_ttl_secs: u64,
    /// How often idle sessions are reaped (valid range: 10-86400).
    pub reap_interval_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            static_dir: None,
            session_cookie: "kaiwa_session".into(),
            session_ttl_secs: 86400,
            reap_interval_secs: 300,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
