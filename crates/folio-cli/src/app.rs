use folio_config::{ConfigResult, Settings, SettingsStore};
use folio_core::{ChatMessage, ChatSession};

use crate::client::RelayClient;

pub const CLIENT_FAILURE_REPLY: &str = "Sorry, I encountered an error. Please try again.";

const CLEARED_GREETING: &str = "Chat history cleared. How can I help you today?";

/// Client-side conversation: the greeting, every turn, and the credential
/// that goes out with each request.
pub struct ChatWidget {
    client: RelayClient,
    store: SettingsStore,
    settings: Settings,
    session: ChatSession,
}

impl ChatWidget {
    /// Open the widget with `settings` already loaded from `store`
    pub fn new(client: RelayClient, store: SettingsStore, settings: Settings, owner: &str) -> Self {
        let mut session = ChatSession::new();
        session.push(ChatMessage::assistant(format!(
            "Hi there! I'm {}'s AI assistant. How can I help you today?",
            owner
        )));

        Self {
            client,
            store,
            settings,
            session,
        }
    }

    /// Load settings from the store, then open
    pub async fn open(client: RelayClient, store: SettingsStore, owner: &str) -> ConfigResult<Self> {
        let settings = store.load().await?;
        Ok(Self::new(client, store, settings, owner))
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Turns to render; system messages stay hidden
    pub fn visible_messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.session.visible_messages()
    }

    /// Send one user turn. Blank input is ignored and returns `None`;
    /// otherwise the reply (or the failure notice) is appended and returned.
    pub async fn send(&mut self, content: &str) -> Option<&ChatMessage> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        self.session.push(ChatMessage::user(content));

        let reply = match self
            .client
            .send(self.session.messages(), self.settings.credential())
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Error sending message: {}", e);
                ChatMessage::assistant(CLIENT_FAILURE_REPLY)
            }
        };

        self.session.push(reply);
        self.session.last()
    }

    /// Drop the conversation and start over with a fresh greeting
    pub fn clear(&mut self) {
        self.session.clear();
        self.session.push(ChatMessage::assistant(CLEARED_GREETING));
    }

    pub fn has_api_key(&self) -> bool {
        self.settings.credential().is_some()
    }

    /// Store a new credential and persist it
    pub async fn save_api_key(&mut self, key: &str) -> ConfigResult<()> {
        self.settings.set_api_key(key.trim());
        self.store.save(&self.settings).await
    }

    pub async fn clear_api_key(&mut self) -> ConfigResult<()> {
        self.settings.clear_api_key();
        self.store.save(&self.settings).await
    }
}
