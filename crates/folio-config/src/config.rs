use serde::{Deserialize, Serialize};

/// Server configuration root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub version: String,
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub chat: ChatConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            server: ServerConfig::default(),
            site: SiteConfig::default(),
            chat: ChatConfig::default(),
            content: ContentConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Read a value by dotted key, e.g. `chat.model`
    pub fn get_value(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["version"] => Some(self.version.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),
            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "cors"] => Some(self.server.cors.to_string()),
            ["site", "url"] => Some(self.site.url.clone()),
            ["site", "owner"] => Some(self.site.owner.clone()),
            ["chat", "base_url"] => Some(self.chat.base_url.clone()),
            ["chat", "model"] => Some(self.chat.model.clone()),
            ["chat", "max_tokens"] => Some(self.chat.max_tokens.to_string()),
            ["chat", "temperature"] => Some(self.chat.temperature.to_string()),
            ["chat", "timeout_seconds"] => self.chat.timeout_seconds.map(|t| t.to_string()),
            ["chat", "system_prompt"] => self.chat.system_prompt.clone(),
            ["chat", "strip_client_system_messages"] => {
                Some(self.chat.strip_client_system_messages.to_string())
            }
            ["content", "posts_dir"] => Some(self.content.posts_dir.clone()),
            ["content", "resume_path"] => Some(self.content.resume_path.clone()),
            ["logging", "level"] => Some(self.logging.level.to_string()),
            ["logging", "json"] => Some(self.logging.json.to_string()),
            _ => None,
        }
    }

    /// Set a value by dotted key
    pub fn set_value(&mut self, key: &str, value: &str) -> ConfigResult<()> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["server", "port"] => self.server.port = parse(value, "port number")?,
            ["server", "host"] => self.server.host = value.to_string(),
            ["server", "cors"] => self.server.cors = parse(value, "boolean")?,
            ["site", "url"] => self.site.url = value.trim_end_matches('/').to_string(),
            ["site", "owner"] => self.site.owner = value.to_string(),
            ["chat", "base_url"] => self.chat.base_url = value.trim_end_matches('/').to_string(),
            ["chat", "model"] => self.chat.model = value.to_string(),
            ["chat", "max_tokens"] => self.chat.max_tokens = parse(value, "number")?,
            ["chat", "temperature"] => self.chat.temperature = parse(value, "number")?,
            ["chat", "timeout_seconds"] => {
                self.chat.timeout_seconds = if value.is_empty() {
                    None
                } else {
                    Some(parse(value, "number")?)
                };
            }
            ["chat", "system_prompt"] => {
                self.chat.system_prompt = Some(value.to_string()).filter(|v| !v.is_empty());
            }
            ["chat", "strip_client_system_messages"] => {
                self.chat.strip_client_system_messages = parse(value, "boolean")?;
            }
            ["content", "posts_dir"] => self.content.posts_dir = value.to_string(),
            ["content", "resume_path"] => self.content.resume_path = value.to_string(),
            ["logging", "level"] => self.logging.level = value.parse()?,
            ["logging", "json"] => self.logging.json = parse(value, "boolean")?,
            _ => return Err(ConfigError::KeyNotFound(key.to_string())),
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(value: &str, what: &str) -> ConfigResult<T> {
    value
        .parse()
        .map_err(|_| ConfigError::Validation(format!("Invalid {}: {}", what, value)))
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8081,
            host: "127.0.0.1".to_string(),
            cors: true,
        }
    }
}

/// Public identity of the site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Canonical origin used in the sitemap and robots file, without trailing slash
    pub url: String,
    /// Name the chat persona speaks for
    pub owner: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "https://berkdurmus.com".to_string(),
            owner: "Berk".to_string(),
        }
    }
}

/// Completion service settings for the chat relay
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Left unset, the HTTP client's own default applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    /// Overrides the built-in persona
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    /// Drop caller-supplied system messages and always inject the persona
    pub strip_client_system_messages: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
            timeout_seconds: None,
            system_prompt: None,
            strip_client_system_messages: false,
        }
    }
}

impl ChatConfig {
    /// The system prompt injected ahead of the conversation
    pub fn persona(&self, owner: &str) -> String {
        match &self.system_prompt {
            Some(prompt) => prompt.clone(),
            None => format!(
                "You are a helpful assistant on {owner}'s personal website. You can provide \
                 information about {owner}'s background, skills, and projects. Be friendly, \
                 concise, and helpful. If you don't know something specific about {owner}, \
                 you can say so and provide general advice instead."
            ),
        }
    }
}

/// Where content lives on disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding `<slug>.md` files
    pub posts_dir: String,
    pub resume_path: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            posts_dir: "content/posts".to_string(),
            resume_path: "resume/resume.pdf".to_string(),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::Validation(format!("Invalid log level: {}", s))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Watch error: {0}")]
    #[cfg(feature = "hot-reload")]
    Watch(#[from] notify::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
