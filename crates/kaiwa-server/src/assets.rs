//! Front-end assets built into the binary.

use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

pub const CHAT_JS: &str = include_str!("../static/chat.js");
pub const CHAT_CSS: &str = include_str!("../static/chat.css");

pub async fn chat_js() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/javascript; charset=utf-8")], CHAT_JS)
}

pub async fn chat_css() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], CHAT_CSS)
}
