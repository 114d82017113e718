//! HTTP routes.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use kaiwa_common::{new_correlation_id, SessionId};
use serde::Serialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Instrument;

use crate::assets;
use crate::cookie::{attach_session_cookie, resolve_session};
use crate::error::ApiError;
use crate::state::AppState;

/// Body of a successful `POST /chat`. Absent parts serialize as `null`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub thinking: Option<String>,
    pub reply: Option<String>,
}

pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/chat", post(chat))
        .route("/health", get(health));

    let router = match &state.static_dir {
        Some(dir) => router.nest_service("/static", ServeDir::new(dir)),
        None => router
            .route("/static/chat.js", get(assets::chat_js))
            .route("/static/chat.css", get(assets::chat_css)),
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (session_id, is_new) = resolve_session(&headers, &state.cookie_name);
    state.transcripts.get(&session_id).await;

    let mut response = match state.page.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => ApiError::Page(e.to_string()).into_response(),
    };
    if is_new {
        attach_session_cookie(&mut response, &state.cookie_name, &session_id);
    }
    response
}

async fn chat(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let (session_id, is_new) = resolve_session(&headers, &state.cookie_name);
    let message = extract_message(&body);

    let span = tracing::info_span!(
        "chat",
        request_id = %new_correlation_id(),
        session_id = %session_id,
    );
    let mut response = match run_chat(&state, &session_id, &message)
        .instrument(span)
        .await
    {
        Ok(body) => Json(body).into_response(),
        Err(e) => e.into_response(),
    };
    if is_new {
        attach_session_cookie(&mut response, &state.cookie_name, &session_id);
    }
    response
}

async fn run_chat(
    state: &AppState,
    session_id: &SessionId,
    message: &str,
) -> Result<ChatResponse, ApiError> {
    let history = state.transcripts.get(session_id).await;
    let completion = state.relay.complete(message, &history).await?;
    state
        .transcripts
        .append(session_id, completion.message, completion.raw_reply)
        .await;
    Ok(ChatResponse {
        thinking: completion.thinking,
        reply: completion.reply,
    })
}

/// The `message` field of a JSON body. Anything else reads as empty.
fn extract_message(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message")?.as_str().map(String::from))
        .unwrap_or_default()
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "kaiwa",
        "sessions": state.transcripts.count().await,
        "provider_configured": state.relay.is_configured(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_message_reads_string_field() {
        assert_eq!(extract_message(r#"{"message":"こんにちは"}"#.as_bytes()), "こんにちは");
    }

    #[test]
    fn extract_message_is_lenient() {
        assert_eq!(extract_message(b""), "");
        assert_eq!(extract_message(b"not json"), "");
        assert_eq!(extract_message(br#"{"text":"hi"}"#), "");
        assert_eq!(extract_message(br#"{"message":42}"#), "");
        assert_eq!(extract_message(br#"["message"]"#), "");
    }

    #[test]
    fn chat_response_serializes_absent_parts_as_null() {
        let json = serde_json::to_value(ChatResponse {
            thinking: None,
            reply: Some(String::new()),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"thinking": null, "reply": ""}));
    }
}
