//! Server and session validation.

use crate::schema::KaiwaConfig;

use super::helpers::{validate_non_empty, validate_range};

/// Validate listener and session constraints.
pub(crate) fn validate_server(errors: &mut Vec<String>, config: &KaiwaConfig) {
    let server = &config.server;
    validate_non_empty(errors, "server.host", &server.host);
    validate_range(errors, "server.port", u64::from(server.port), 1, 65535);
    validate_range(
        errors,
        "server.session_ttl_secs",
        server.session_ttl_secs,
        60,
        2_592_000,
    );
    validate_range(
        errors,
        "server.reap_interval_secs",
        server.reap_interval_secs,
        10,
        86_400,
    );

    if let Some(dir) = &server.static_dir {
        validate_non_empty(errors, "server.static_dir", dir);
    }

    let cookie = &server.session_cookie;
    validate_non_empty(errors, "server.session_cookie", cookie);
    if !cookie
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        errors.push(format!(
            "server.session_cookie = {cookie:?} may only contain ASCII letters, digits, '_' and '-'"
        ));
    }
}
