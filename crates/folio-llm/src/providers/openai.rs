use async_trait::async_trait;
use std::time::Duration;

use crate::error::Result;
use crate::provider::{BaseProvider, LLMProvider, ProviderConfig};
use crate::request::{Completion, CompletionRequest};
use crate::transformer::OpenAiTransformer;

/// OpenAI chat completions, or any endpoint speaking the same schema
pub struct OpenAiProvider {
    base: BaseProvider<OpenAiTransformer>,
}

impl OpenAiProvider {
    pub fn with_config(config: ProviderConfig) -> Result<Self> {
        let base = BaseProvider::new(config, OpenAiTransformer::new())?;
        Ok(Self { base })
    }

    /// Provider against the public OpenAI API
    pub fn new() -> Result<Self> {
        Self::with_config(ProviderConfig::default())
    }

    /// Provider against a compatible endpoint
    pub fn with_base_url(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let config = ProviderConfig::new(base_url);
        match timeout {
            Some(timeout) => Self::with_config(config.with_timeout(timeout)),
            None => Self::with_config(config),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base.config().base_url
    }
}

#[async_trait]
impl LLMProvider for OpenAiProvider {
    fn provider_id(&self) -> &str {
        self.base.provider_id()
    }

    async fn complete(&self, request: CompletionRequest, credential: &str) -> Result<Completion> {
        self.base.complete(request, credential).await
    }
}
