use crate::dtos::{ChatRequest, ChatResponse, ChatWithContextRequest, ChatWithContextResponse};
use crate::error::ChatError;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

/// Single-turn chat: forward the message and return the model's reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<impl IntoResponse, ChatError> {
    req.validate().map_err(|_| ChatError::MissingMessage)?;

    let response = state
        .text_provider
        .generate(&req.message)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Text generation failed");
            ChatError::from(e)
        })?;

    Ok(Json(ChatResponse {
        message: req.message,
        response,
        status: "success",
    }))
}

/// Context-preserving chat: the caller supplies the history, the provider is
/// seeded with it, and the extended history is returned alongside the reply.
pub async fn chat_with_context(
    State(state): State<AppState>,
    Json(req): Json<ChatWithContextRequest>,
) -> Result<impl IntoResponse, ChatError> {
    req.validate().map_err(|_| ChatError::MissingMessage)?;

    let (response, conversation_history) = state
        .text_provider
        .generate_with_history(&req.message, req.conversation_history)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Text generation failed");
            ChatError::from(e)
        })?;

    Ok(Json(ChatWithContextResponse {
        message: req.message,
        response,
        conversation_history,
        status: "success",
    }))
}
