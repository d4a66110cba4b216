use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::clock::now_millis;
use crate::error::ValidationError;
use crate::types::{ChatMessage, Role};

/// Body of a chat relay call: the whole conversation so far plus the
/// caller's credential.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Schema for one inbound message. `id` and `timestamp` may be omitted by
/// hand-written callers and are filled in at the boundary.
#[derive(Debug, Deserialize)]
struct InboundMessage {
    #[serde(default)]
    id: Option<String>,
    role: Role,
    content: String,
    #[serde(default)]
    timestamp: Option<i64>,
}

impl From<InboundMessage> for ChatMessage {
    fn from(msg: InboundMessage) -> Self {
        ChatMessage::restore(
            msg.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            msg.role,
            msg.content,
            msg.timestamp.unwrap_or_else(now_millis),
        )
    }
}

impl RelayRequest {
    pub fn new(messages: Vec<ChatMessage>, api_key: Option<String>) -> Self {
        Self { messages, api_key }
    }

    /// Validate a loosely-typed JSON body and build the typed request.
    ///
    /// `messages` must be a non-empty array of `{role, content}` objects;
    /// `apiKey` must be a string, null, or absent.
    pub fn from_value(body: &Value) -> Result<Self, ValidationError> {
        let obj = body.as_object().ok_or(ValidationError::NotAnObject)?;

        let raw = match obj.get("messages") {
            Some(Value::Array(items)) => items,
            _ => return Err(ValidationError::MessagesNotArray),
        };
        if raw.is_empty() {
            return Err(ValidationError::EmptyMessages);
        }

        let messages = raw
            .iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<InboundMessage>(item.clone())
                    .map(ChatMessage::from)
                    .map_err(|e| ValidationError::InvalidMessage {
                        index,
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let api_key = match obj.get("apiKey") {
            None | Some(Value::Null) => None,
            Some(Value::String(key)) => Some(key.clone()),
            Some(_) => return Err(ValidationError::InvalidApiKey),
        };

        Ok(Self { messages, api_key })
    }

    /// The credential, if one was supplied and is not blank
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}
