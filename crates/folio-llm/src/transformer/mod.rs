pub mod openai;

pub use openai::OpenAiTransformer;

use serde_json::Value;

use crate::error::ConversionError;
use crate::request::{Completion, CompletionRequest};

/// Converts between the internal request/reply types and a provider's wire format
pub trait SchemaTransformer: Send + Sync {
    fn provider_id(&self) -> &str;

    /// Path appended to the provider base URL
    fn endpoint(&self) -> &str;

    fn transform_request(&self, request: &CompletionRequest) -> Result<Value, ConversionError>;

    fn parse_response(&self, data: &Value) -> Result<Completion, ConversionError>;
}
