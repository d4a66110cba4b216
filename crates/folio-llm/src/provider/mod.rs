pub mod base;
pub mod config;

pub use base::BaseProvider;
pub use config::ProviderConfig;

use async_trait::async_trait;

use crate::error::Result;
use crate::request::{Completion, CompletionRequest};

/// A completion service the chat relay can call
#[async_trait]
pub trait LLMProvider: Send + Sync {
    fn provider_id(&self) -> &str;

    /// Make exactly one completion call authenticated with `credential`
    async fn complete(&self, request: CompletionRequest, credential: &str) -> Result<Completion>;
}
