use serde::{Deserialize, Serialize};

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One message in a conversation, tagged with its speaker.
///
/// Conversation history is owned entirely by the caller: the server receives
/// it, appends the new user and model turns, and hands the extended sequence
/// back. Nothing is retained between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(ChatTurn::user("hi")).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["text"], "hi");
    }

    #[test]
    fn model_turn_round_trips() {
        let turn: ChatTurn = serde_json::from_str(r#"{"role":"model","text":"hello"}"#).unwrap();
        assert_eq!(turn.role, Role::Model);
        assert_eq!(turn.text, "hello");
    }
}
