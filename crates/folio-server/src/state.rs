use std::sync::Arc;
use std::time::Duration;

use folio_config::ConfigManager;
use folio_llm::{LLMProvider, OpenAiProvider};

/// Shared by every handler. Config is re-read per request so hot reloads
/// take effect; the provider is fixed at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: ConfigManager,
    pub provider: Arc<dyn LLMProvider>,
}

impl AppState {
    pub fn new(config: ConfigManager, provider: Arc<dyn LLMProvider>) -> Self {
        Self { config, provider }
    }

    /// Build the OpenAI-compatible provider from the `chat` section
    pub async fn from_config(config: ConfigManager) -> anyhow::Result<Self> {
        let snapshot = config.snapshot().await;
        let timeout = snapshot.chat.timeout_seconds.map(Duration::from_secs);
        let provider = OpenAiProvider::with_base_url(snapshot.chat.base_url.clone(), timeout)?;

        tracing::info!(
            base_url = provider.base_url(),
            model = %snapshot.chat.model,
            "Completion provider ready"
        );

        Ok(Self::new(config, Arc::new(provider)))
    }
}
