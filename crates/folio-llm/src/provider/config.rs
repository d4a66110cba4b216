use std::time::Duration;

/// Where and how long to talk to a completion service
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL for the API, without trailing slash
    pub base_url: String,
    /// `None` keeps the HTTP client's default (no overall timeout)
    pub timeout: Option<Duration>,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new("https://api.openai.com/v1")
    }
}
