//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use crate::models::ChatTurn;
use async_trait::async_trait;

enum MockBehavior {
    Reply(String),
    Echo,
    Fail(String),
}

/// Mock text provider with a scripted outcome.
pub struct MockTextProvider {
    behavior: MockBehavior,
}

impl MockTextProvider {
    /// Answer every message with the same reply.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Reply(reply.into()),
        }
    }

    /// Answer each message with a reply derived from it.
    pub fn echoing() -> Self {
        Self {
            behavior: MockBehavior::Echo,
        }
    }

    /// Fail every call with the given API error text.
    pub fn failing(error_text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Fail(error_text.into()),
        }
    }

    fn reply_to(&self, message: &str) -> Result<String, ProviderError> {
        match &self.behavior {
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Echo => Ok(format!("Mock response for: {}", message)),
            MockBehavior::Fail(text) => Err(ProviderError::ApiError(text.clone())),
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, message: &str) -> Result<String, ProviderError> {
        self.reply_to(message)
    }

    async fn generate_with_history(
        &self,
        message: &str,
        mut history: Vec<ChatTurn>,
    ) -> Result<(String, Vec<ChatTurn>), ProviderError> {
        let reply = self.reply_to(message)?;

        history.push(ChatTurn::user(message));
        history.push(ChatTurn::model(reply.clone()));

        Ok((reply, history))
    }
}
