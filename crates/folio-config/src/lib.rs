pub mod config;
pub mod manager;
pub mod settings;

pub use config::{
    ChatConfig, Config, ConfigError, ConfigResult, ContentConfig, LogLevel, LoggingConfig,
    ServerConfig, SiteConfig,
};
pub use manager::ConfigManager;
pub use settings::{Settings, SettingsStore};

use std::path::PathBuf;

/// Folio home directory (~/.folio)
pub fn folio_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".folio"))
}

/// Default server config file (~/.folio/config.json)
pub fn default_config_path() -> Option<PathBuf> {
    folio_dir().map(|dir| dir.join("config.json"))
}

/// Default client settings file (~/.folio/settings.json)
pub fn default_settings_path() -> Option<PathBuf> {
    folio_dir().map(|dir| dir.join("settings.json"))
}

/// Expand a leading `~/` to the user's home directory
pub fn expand_tilde(path: &str) -> Option<PathBuf> {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir().map(|home| home.join(rest))
    } else {
        Some(PathBuf::from(path))
    }
}
