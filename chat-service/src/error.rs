use crate::services::providers::ProviderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Handler-boundary errors for the chat API.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message is required")]
    MissingMessage,

    #[error("API quota exceeded")]
    QuotaExceeded,

    #[error("AI service failure: {0}")]
    Upstream(String),
}

impl From<ProviderError> for ChatError {
    fn from(err: ProviderError) -> Self {
        let text = err.to_string();
        if is_quota_exhausted(&text) {
            ChatError::QuotaExceeded
        } else {
            ChatError::Upstream(text)
        }
    }
}

/// A failure counts as quota exhaustion when its text carries both the 429
/// marker and the word "quota" (any case). The upstream error body is the
/// only signal available for this.
fn is_quota_exhausted(text: &str) -> bool {
    text.contains("429") && text.to_lowercase().contains("quota")
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<&'static str>,
        }

        let (status_code, body) = match self {
            ChatError::MissingMessage => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Message is required",
                    details: None,
                    status: None,
                },
            ),
            ChatError::QuotaExceeded => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorResponse {
                    error: "API quota exceeded. Please try again later.",
                    details: Some(
                        "The Google AI API has reached its free tier limits.".to_string(),
                    ),
                    status: Some("quota_exceeded"),
                },
            ),
            ChatError::Upstream(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "AI service temporarily unavailable. Please try again.",
                    details: Some(details),
                    status: Some("api_error"),
                },
            ),
        };

        (status_code, Json(body)).into_response()
    }
}
