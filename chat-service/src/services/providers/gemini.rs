//! Gemini AI provider implementation.
//!
//! Text generation using Google's Gemini REST API, with optional seeding
//! from a caller-supplied conversation history.

use super::{ProviderError, TextProvider};
use crate::models::{ChatTurn, Role};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Build the API URL for the given model and method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            GEMINI_API_BASE, self.config.model, method, self.config.api_key
        )
    }

    async fn generate_content(&self, contents: Vec<Content>) -> Result<String, ProviderError> {
        let request = GenerateContentRequest { contents };
        let url = self.api_url("generateContent");

        tracing::debug!(
            model = %self.config.model,
            turns = request.contents.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| ProviderError::ApiError("Gemini response contained no text".to_string()))
    }
}

fn user_content(message: &str) -> Content {
    Content {
        role: Some(Role::User.as_str().to_string()),
        parts: vec![Part {
            text: message.to_string(),
        }],
    }
}

fn turn_to_content(turn: &ChatTurn) -> Content {
    Content {
        role: Some(turn.role.as_str().to_string()),
        parts: vec![Part {
            text: turn.text.clone(),
        }],
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, message: &str) -> Result<String, ProviderError> {
        self.generate_content(vec![user_content(message)]).await
    }

    async fn generate_with_history(
        &self,
        message: &str,
        mut history: Vec<ChatTurn>,
    ) -> Result<(String, Vec<ChatTurn>), ProviderError> {
        // History is forwarded as-is; a malformed history is the external
        // service's error to report.
        let mut contents: Vec<Content> = history.iter().map(turn_to_content).collect();
        contents.push(user_content(message));

        let reply = self.generate_content(contents).await?;

        history.push(ChatTurn::user(message));
        history.push(ChatTurn::model(reply.clone()));

        Ok((reply, history))
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_map_to_gemini_wire_format() {
        let content = turn_to_content(&ChatTurn::model("hello"));
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["role"], "model");
        assert_eq!(json["parts"][0]["text"], "hello");
    }
}
