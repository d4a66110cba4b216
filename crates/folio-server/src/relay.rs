use folio_config::ChatConfig;
use folio_core::{ChatMessage, RelayRequest, Role};
use folio_llm::{CompletionRequest, LLMProvider, PromptMessage};

pub const MISSING_CREDENTIAL_REPLY: &str =
    "I need an API key to function. Please provide your OpenAI API key in the chat settings.";

pub const RELAY_FAILURE_REPLY: &str = "Sorry, I encountered an error. Please try again later.";

/// Turns a conversation into exactly one assistant reply.
///
/// Never fails: a missing credential or any upstream problem becomes a
/// canned assistant message. Upstream detail only goes to the log.
pub struct ChatRelay<'a> {
    provider: &'a dyn LLMProvider,
    chat: &'a ChatConfig,
    owner: &'a str,
}

impl<'a> ChatRelay<'a> {
    pub fn new(provider: &'a dyn LLMProvider, chat: &'a ChatConfig, owner: &'a str) -> Self {
        Self {
            provider,
            chat,
            owner,
        }
    }

    pub async fn relay(&self, request: RelayRequest) -> ChatMessage {
        let latest = request.messages.iter().map(ChatMessage::timestamp).max();

        let Some(credential) = request.credential() else {
            tracing::debug!("No credential supplied, skipping completion call");
            return reply_after(MISSING_CREDENTIAL_REPLY, latest);
        };

        let completion = self
            .prompt(&request.messages)
            .max_tokens(self.chat.max_tokens)
            .temperature(self.chat.temperature);

        match self.provider.complete(completion, credential).await {
            Ok(completion) => reply_after(completion.content, latest),
            Err(e) => {
                tracing::error!(provider = self.provider.provider_id(), "Chat relay failed: {}", e);
                reply_after(RELAY_FAILURE_REPLY, latest)
            }
        }
    }

    /// Strip ids and timestamps and make sure a system prompt leads
    fn prompt(&self, history: &[ChatMessage]) -> CompletionRequest {
        let mut request = CompletionRequest::new(&self.chat.model)
            .with_messages(history.iter().map(PromptMessage::from));
        let persona = PromptMessage::new(Role::System, self.chat.persona(self.owner));

        if self.chat.strip_client_system_messages {
            if request.has_system_message() {
                tracing::warn!("Dropping client-supplied system message(s)");
                request.messages.retain(|m| m.role != Role::System);
            }
            request.messages.insert(0, persona);
        } else if request.has_system_message() {
            tracing::warn!("Client supplied a system message; persona not injected");
        } else {
            request.messages.insert(0, persona);
        }
        request
    }
}

/// Assistant reply that sorts after every message it answers, even when the
/// client clock runs ahead of ours.
fn reply_after(content: impl Into<String>, latest: Option<i64>) -> ChatMessage {
    let reply = ChatMessage::assistant(content);
    match latest {
        Some(latest) if reply.timestamp() <= latest => ChatMessage::restore(
            reply.id().to_string(),
            Role::Assistant,
            reply.content().to_string(),
            latest + 1,
        ),
        _ => reply,
    }
}
