use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kaiwa_ai::RelayError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Relay(#[from] RelayError),
    #[error("page error: {0}")]
    Page(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Relay(RelayError::Configuration(msg)) => {
                tracing::error!("chat rejected, provider not configured: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            ApiError::Relay(RelayError::Input(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Relay(RelayError::Provider(e)) => {
                tracing::warn!("chat completion failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::Page(msg) => {
                tracing::error!("landing page render failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".into(),
                )
            }
        };
        (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
    }
}
