use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::now_millis;
use crate::types::message::ChatMessage;

/// An in-memory conversation.
///
/// Lives as long as the widget that opened it; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    id: String,
    messages: Vec<ChatMessage>,
    created_at: i64,
    updated_at: i64,
}

impl ChatSession {
    pub fn new() -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }

    /// Append a turn.
    ///
    /// Timestamps stay strictly increasing in conversation order: a message
    /// stamped at or before the previous turn (clock skew between client and
    /// server) is moved to one millisecond after it.
    pub fn push(&mut self, message: ChatMessage) {
        let message = match self.messages.last() {
            Some(last) if message.timestamp() <= last.timestamp() => {
                let ts = last.timestamp() + 1;
                message.restamped(ts)
            }
            _ => message,
        };
        self.updated_at = now_millis().max(message.timestamp());
        self.messages.push(message);
    }

    /// All turns, including system messages
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Turns that may be rendered to the reader
    pub fn visible_messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|m| m.is_visible())
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every turn, keeping the session identity
    pub fn clear(&mut self) {
        self.messages.clear();
        self.updated_at = now_millis();
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn test_push_preserves_order() {
        let mut session = ChatSession::new();
        session.push(ChatMessage::user("first"));
        session.push(ChatMessage::assistant("second"));

        let contents: Vec<_> = session.messages().iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["first", "second"]);
        assert!(session.updated_at() >= session.created_at());
    }

    #[test]
    fn test_push_restamps_stale_timestamp() {
        let mut session = ChatSession::new();
        session.push(ChatMessage::restore("a", Role::User, "hi", 5_000));
        session.push(ChatMessage::restore("b", Role::Assistant, "hello", 4_000));

        let stamps: Vec<_> = session.messages().iter().map(|m| m.timestamp()).collect();
        assert_eq!(stamps, vec![5_000, 5_001]);
        assert_eq!(session.messages()[1].id(), "b");
    }

    #[test]
    fn test_visible_messages_hide_system() {
        let mut session = ChatSession::new();
        session.push(ChatMessage::system("persona"));
        session.push(ChatMessage::user("question"));

        let visible: Vec<_> = session.visible_messages().map(|m| m.content()).collect();
        assert_eq!(visible, vec!["question"]);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_clear_keeps_identity() {
        let mut session = ChatSession::new();
        let id = session.id().to_string();
        session.push(ChatMessage::user("x"));
        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.id(), id);
    }
}
