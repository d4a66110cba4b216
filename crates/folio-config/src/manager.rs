use crate::config::{Config, ConfigError, ConfigResult};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Shared, reloadable server configuration
#[derive(Clone)]
pub struct ConfigManager {
    path: PathBuf,
    config: Arc<RwLock<Config>>,
    #[cfg(feature = "hot-reload")]
    watcher: Option<Arc<RwLock<notify::RecommendedWatcher>>>,
}

impl ConfigManager {
    /// Load the config file, writing defaults if it does not exist yet
    pub async fn load(path: &Path) -> ConfigResult<Self> {
        let config = if path.exists() {
            info!("Loading config from {:?}", path);
            Self::read_file(path).await?
        } else {
            info!("Config file not found, creating default config at {:?}", path);
            let default_config = Config::default();
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let content = serde_json::to_string_pretty(&default_config)?;
            tokio::fs::write(path, &content).await?;
            default_config
        };

        Ok(Self {
            path: path.to_path_buf(),
            config: Arc::new(RwLock::new(config)),
            #[cfg(feature = "hot-reload")]
            watcher: None,
        })
    }

    /// ~/.folio/config.json
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        crate::default_config_path()
            .ok_or_else(|| ConfigError::InvalidPath("Could not find home directory".to_string()))
    }

    /// Wrap an in-memory config (tests, embedding)
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(config)),
            #[cfg(feature = "hot-reload")]
            watcher: None,
        }
    }

    /// Clone of the current config
    pub async fn snapshot(&self) -> Config {
        self.config.read().await.clone()
    }

    pub async fn save(&self) -> ConfigResult<()> {
        self.save_to(&self.path).await?;
        info!("Config saved to {:?}", self.path);
        Ok(())
    }

    pub async fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let config = self.config.read().await;
        let content = serde_json::to_string_pretty(&*config)?;
        drop(config);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(path, content).await?;
        Ok(())
    }

    /// Re-read the file; the current config is kept if the new one is invalid
    pub async fn reload(&self) -> ConfigResult<()> {
        if !self.path.exists() {
            return Err(ConfigError::InvalidPath(format!(
                "Config file not found: {:?}",
                self.path
            )));
        }

        let new_config = Self::read_file(&self.path).await?;

        let mut config = self.config.write().await;
        *config = new_config;
        drop(config);

        info!("Config reloaded from {:?}", self.path);
        Ok(())
    }

    /// Mutate in memory, validate, then persist
    pub async fn update<F>(&self, f: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config) -> ConfigResult<()>,
    {
        let mut config = self.config.write().await;
        let mut candidate = config.clone();
        f(&mut candidate)?;
        Self::validate(&candidate)?;
        *config = candidate;
        drop(config);
        self.save().await
    }

    pub fn validate(config: &Config) -> ConfigResult<()> {
        if config.server.port == 0 {
            return Err(ConfigError::Validation("Server port cannot be 0".to_string()));
        }

        if config.site.url.trim().is_empty() {
            return Err(ConfigError::Validation("Site url cannot be empty".to_string()));
        }

        if config.chat.base_url.trim().is_empty() {
            return Err(ConfigError::Validation("Chat base_url cannot be empty".to_string()));
        }

        if config.chat.model.trim().is_empty() {
            return Err(ConfigError::Validation("Chat model cannot be empty".to_string()));
        }

        if config.chat.max_tokens == 0 {
            return Err(ConfigError::Validation(
                "Chat max_tokens must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&config.chat.temperature) {
            return Err(ConfigError::Validation(format!(
                "Chat temperature must be within 0.0..=2.0, got {}",
                config.chat.temperature
            )));
        }

        if config.chat.timeout_seconds == Some(0) {
            return Err(ConfigError::Validation(
                "Chat timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    async fn read_file(path: &Path) -> ConfigResult<Config> {
        let content = tokio::fs::read_to_string(path).await?;
        let content = Self::expand_env_vars(&content)?;
        let config: Config = serde_json::from_str(&content)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Expand `${VAR}` and `${VAR:-default}`
    fn expand_env_vars(content: &str) -> ConfigResult<String> {
        static ENV_REF: OnceLock<Regex> = OnceLock::new();
        let re = ENV_REF.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env placeholder pattern is valid")
        });

        let mut missing = None;
        let expanded = re.replace_all(content, |cap: &regex::Captures<'_>| {
            let var_expr = &cap[1];
            let (var_name, default_value) = match var_expr.split_once(":-") {
                Some((name, default)) => (name, Some(default)),
                None => (var_expr, None),
            };

            match (std::env::var(var_name), default_value) {
                (Ok(val), _) => val,
                (Err(_), Some(default)) => default.to_string(),
                (Err(_), None) => {
                    debug!("Config references unset variable {}", var_name);
                    missing.get_or_insert_with(|| var_name.to_string());
                    String::new()
                }
            }
        });

        match missing {
            Some(var) => Err(ConfigError::EnvVarNotFound(var)),
            None => Ok(expanded.into_owned()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(feature = "hot-reload")]
impl ConfigManager {
    /// Reload whenever the file changes on disk
    pub fn watch<F>(&mut self, callback: F) -> ConfigResult<()>
    where
        F: Fn() + Send + 'static,
    {
        use notify::{
            Config as NotifyConfig, Event, RecommendedWatcher, RecursiveMode,
            Result as NotifyResult, Watcher,
        };
        use std::sync::mpsc::channel;
        use std::thread;

        let manager = self.clone();
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: NotifyResult<Event>| {
                if let Ok(event) = res {
                    if event.kind.is_modify() {
                        let _ = tx.send(());
                    }
                }
            },
            NotifyConfig::default(),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;
        self.watcher = Some(Arc::new(RwLock::new(watcher)));

        thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    warn!("Config watcher could not start a runtime: {}", e);
                    return;
                }
            };

            while rx.recv().is_ok() {
                debug!("Config file changed, reloading...");
                match rt.block_on(manager.reload()) {
                    Ok(()) => {
                        info!("Config hot-reloaded successfully");
                        callback();
                    }
                    Err(e) => warn!("Failed to hot-reload config: {}", e),
                }
            }
        });

        info!("Started watching config file: {:?}", self.path);
        Ok(())
    }
}
