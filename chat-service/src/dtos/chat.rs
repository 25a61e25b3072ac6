use crate::models::ChatTurn;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub response: String,
    pub status: &'static str,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChatWithContextRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,

    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatWithContextResponse {
    pub message: String,
    pub response: String,
    pub conversation_history: Vec<ChatTurn>,
    pub status: &'static str,
}
