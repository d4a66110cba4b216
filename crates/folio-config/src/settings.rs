//! Client-side settings: the caller's completion-service credential.
//!
//! This is the local-storage equivalent for non-browser clients. Settings are
//! read and written only through [`SettingsStore`], so the widget receives
//! its credential as an explicit value instead of reaching for a global.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{ConfigError, ConfigResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(
        rename = "openai-api-key",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub api_key: Option<String>,
}

impl Settings {
    /// The stored credential, ignoring blanks
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        let key = key.into();
        self.api_key = if key.trim().is_empty() { None } else { Some(key) };
    }

    pub fn clear_api_key(&mut self) {
        self.api_key = None;
    }
}

/// File-backed load/save boundary for [`Settings`]
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at ~/.folio/settings.json
    pub fn default_location() -> ConfigResult<Self> {
        crate::default_settings_path()
            .map(Self::new)
            .ok_or_else(|| ConfigError::InvalidPath("Could not find home directory".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means empty settings
    pub async fn load(&self) -> ConfigResult<Settings> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {:?}", self.path);
                Ok(Settings::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn save(&self, settings: &Settings) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        tokio::fs::write(&self.path, content).await?;
        info!("Settings saved to {:?}", self.path);
        Ok(())
    }
}
