//! Session cookie read/write.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use kaiwa_common::SessionId;

/// Session id carried by the request's `Cookie` headers, if any.
/// Values that are not UUIDs are ignored.
pub fn session_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| SessionId::parse(value))
}

/// Existing session from the request, or a fresh one. The flag is `true`
/// when the id was just minted and the response must set the cookie.
pub fn resolve_session(headers: &HeaderMap, cookie_name: &str) -> (SessionId, bool) {
    match session_from_headers(headers, cookie_name) {
        Some(id) => (id, false),
        None => (SessionId::new(), true),
    }
}

/// `Set-Cookie` value for a browser-session cookie.
pub fn session_cookie(cookie_name: &str, session_id: &SessionId) -> String {
    format!("{cookie_name}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn attach_session_cookie(response: &mut Response, cookie_name: &str, session_id: &SessionId) {
    match HeaderValue::from_str(&session_cookie(cookie_name, session_id)) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => tracing::warn!(error = %e, "could not encode session cookie"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn finds_named_cookie_among_others() {
        let sid = SessionId::new();
        let headers = headers_with_cookie(&format!("theme=dark; kaiwa_session={sid}; lang=ja"));
        assert_eq!(session_from_headers(&headers, "kaiwa_session"), Some(sid));
    }

    #[test]
    fn ignores_other_cookie_names() {
        let sid = SessionId::new();
        let headers = headers_with_cookie(&format!("other_session={sid}"));
        assert!(session_from_headers(&headers, "kaiwa_session").is_none());
    }

    #[test]
    fn ignores_non_uuid_values() {
        let headers = headers_with_cookie("kaiwa_session=admin");
        assert!(session_from_headers(&headers, "kaiwa_session").is_none());
    }

    #[test]
    fn resolve_mints_when_missing() {
        let (sid, is_new) = resolve_session(&HeaderMap::new(), "kaiwa_session");
        assert!(is_new);
        assert!(!sid.as_str().is_empty());
    }

    #[test]
    fn resolve_reuses_existing() {
        let sid = SessionId::new();
        let headers = headers_with_cookie(&format!("kaiwa_session={sid}"));
        assert_eq!(resolve_session(&headers, "kaiwa_session"), (sid, false));
    }

    #[test]
    fn cookie_round_trips_through_header() {
        let sid = SessionId::new();
        let set_cookie = session_cookie("kaiwa_session", &sid);
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("SameSite=Lax"));

        // A browser sends back only the name=value pair.
        let pair = set_cookie.split(';').next().unwrap();
        let headers = headers_with_cookie(pair);
        assert_eq!(session_from_headers(&headers, "kaiwa_session"), Some(sid));
    }
}
