use std::time::Duration;

use folio_core::{ChatMessage, ErrorBody, RelayRequest, RelayResponse};
use reqwest::Client;

/// HTTP client for a running folio-server
#[derive(Debug, Clone)]
pub struct RelayClient {
    base_url: String,
    client: Client,
}

impl RelayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health_check(&self) -> bool {
        match self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Post the whole conversation and return the assistant's reply
    pub async fn send(
        &self,
        messages: &[ChatMessage],
        api_key: Option<&str>,
    ) -> anyhow::Result<ChatMessage> {
        let request = RelayRequest::new(messages.to_vec(), api_key.map(str::to_string));

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            anyhow::bail!("Chat request failed ({}): {}", status, detail);
        }

        let body: RelayResponse = response.json().await?;
        Ok(body.message)
    }
}
