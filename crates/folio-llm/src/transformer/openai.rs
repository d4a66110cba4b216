use serde_json::{json, Value};

use crate::error::ConversionError;
use crate::request::{Completion, CompletionRequest};
use crate::transformer::SchemaTransformer;

/// OpenAI chat-completions schema
pub struct OpenAiTransformer;

impl OpenAiTransformer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OpenAiTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaTransformer for OpenAiTransformer {
    fn provider_id(&self) -> &str {
        "openai"
    }

    fn endpoint(&self) -> &str {
        "/chat/completions"
    }

    fn transform_request(&self, request: &CompletionRequest) -> Result<Value, ConversionError> {
        if request.messages.is_empty() {
            return Err(ConversionError::InvalidFormat(
                "request has no messages".to_string(),
            ));
        }

        let mut body = json!({
            "model": request.model,
            "messages": serde_json::to_value(&request.messages)?,
        });

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        if let Some(temp) = request.temperature {
            body["temperature"] = json!(temp);
        }

        Ok(body)
    }

    fn parse_response(&self, data: &Value) -> Result<Completion, ConversionError> {
        let choice = data["choices"]
            .get(0)
            .ok_or_else(|| ConversionError::MissingField("choices".to_string()))?;

        let content = choice["message"]["content"]
            .as_str()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ConversionError::MissingField("choices[0].message.content".to_string()))?;

        Ok(Completion {
            id: data["id"].as_str().map(str::to_string),
            model: data["model"].as_str().map(str::to_string),
            content: content.to_string(),
        })
    }
}
