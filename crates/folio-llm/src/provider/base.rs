use async_trait::async_trait;
use reqwest::{header, Client};
use std::sync::Arc;

use crate::error::{LLMError, Result};
use crate::provider::{LLMProvider, ProviderConfig};
use crate::request::{Completion, CompletionRequest};
use crate::transformer::SchemaTransformer;

/// HTTP plumbing shared by providers; schema work is delegated to the transformer.
///
/// Exactly one attempt per call: no retry middleware, no streaming.
pub struct BaseProvider<T: SchemaTransformer> {
    config: ProviderConfig,
    http_client: Client,
    transformer: Arc<T>,
}

impl<T: SchemaTransformer + 'static> BaseProvider<T> {
    pub fn new(config: ProviderConfig, transformer: T) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| LLMError::Config(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
            transformer: Arc::new(transformer),
        })
    }

    pub fn provider_id(&self) -> &str {
        self.transformer.provider_id()
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn build_headers(&self, credential: &str) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", credential))
            .map_err(|_| LLMError::Auth("credential contains invalid header characters".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        Ok(headers)
    }

    /// Send one non-streaming request
    pub async fn send_request(
        &self,
        request: CompletionRequest,
        credential: &str,
    ) -> Result<Completion> {
        let body = self.transformer.transform_request(&request)?;
        let headers = self.build_headers(credential)?;

        let url = format!("{}{}", self.config.base_url, self.transformer.endpoint());
        tracing::debug!(
            provider = self.provider_id(),
            model = %request.model,
            messages = request.messages.len(),
            "Sending completion request to {}",
            url
        );

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                401 | 403 => LLMError::Auth(error_text),
                429 => LLMError::RateLimited(error_text),
                _ => LLMError::Api {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let response_data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;

        Ok(self.transformer.parse_response(&response_data)?)
    }
}

#[async_trait]
impl<T: SchemaTransformer + 'static> LLMProvider for BaseProvider<T> {
    fn provider_id(&self) -> &str {
        self.provider_id()
    }

    async fn complete(&self, request: CompletionRequest, credential: &str) -> Result<Completion> {
        self.send_request(request, credential).await
    }
}
