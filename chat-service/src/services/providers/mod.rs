//! AI provider abstraction and implementations.
//!
//! A trait seam over the external generative-text API so handlers stay
//! independent of the concrete backend (Gemini in production, mock in tests).

pub mod gemini;
pub mod mock;

use crate::models::ChatTurn;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Stateless single-turn generation.
    async fn generate(&self, message: &str) -> Result<String, ProviderError>;

    /// Generation seeded with a caller-supplied history. Returns the reply
    /// together with the history extended by the new user and model turns.
    async fn generate_with_history(
        &self,
        message: &str,
        history: Vec<ChatTurn>,
    ) -> Result<(String, Vec<ChatTurn>), ProviderError>;
}
