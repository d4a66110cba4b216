use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::now_millis;

/// Unique message identifier
pub type MessageId = String;

/// Originator of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of a conversation.
///
/// Messages are immutable once built: there are getters but no setters, and
/// a conversation grows only by appending new messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    role: Role,
    content: String,
    /// Milliseconds since the Unix epoch
    timestamp: i64,
}

impl ChatMessage {
    /// Create a message with a fresh id and the current time
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: now_millis(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Rebuild a message that was created elsewhere (e.g. received over the wire)
    pub fn restore(
        id: impl Into<MessageId>,
        role: Role,
        content: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            content: content.into(),
            timestamp,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// System messages steer the assistant and are never shown to the reader
    pub fn is_visible(&self) -> bool {
        self.role != Role::System
    }

    /// Same message stamped with a different time. Only used before a
    /// message enters a conversation.
    pub(crate) fn restamped(self, timestamp: i64) -> Self {
        Self { timestamp, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_message() {
        let msg = ChatMessage::system("You are a helpful assistant");
        assert_eq!(msg.role(), Role::System);
        assert_eq!(msg.content(), "You are a helpful assistant");
        assert!(!msg.is_visible());
    }

    #[test]
    fn test_user_message() {
        let msg = ChatMessage::user("Hello!");
        assert_eq!(msg.role(), Role::User);
        assert!(msg.is_visible());
        assert!(!msg.id().is_empty());
    }

    #[test]
    fn test_fresh_ids_and_timestamps() {
        let a = ChatMessage::user("one");
        let b = ChatMessage::assistant("two");
        assert_ne!(a.id(), b.id());
        assert!(b.timestamp() > a.timestamp());
    }

    #[test]
    fn test_wire_shape() {
        let msg = ChatMessage::restore("m-1", Role::Assistant, "Hi", 1_700_000_000_000);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "m-1",
                "role": "assistant",
                "content": "Hi",
                "timestamp": 1_700_000_000_000i64,
            })
        );
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
        assert_eq!(Role::System.to_string(), "system");
    }
}
