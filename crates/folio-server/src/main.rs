use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use folio_config::ConfigManager;
use folio_server::{logging::init_logging, run_server, AppState};

#[derive(Parser, Debug, Clone)]
#[command(name = "folio-server")]
#[command(about = "Folio portfolio server with chat relay")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Server port (overrides config)
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Bind address (overrides config)
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Log filter (overrides config)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Config file path [default: ~/.folio/config.json]
    #[arg(long, env = "FOLIO_CONFIG")]
    config: Option<String>,

    /// Disable hot-reload
    #[arg(long, default_value = "false")]
    no_watch: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config.as_deref() {
        Some(path) => folio_config::expand_tilde(path).unwrap_or_else(|| PathBuf::from(path)),
        None => ConfigManager::default_config_path()?,
    };

    #[allow(unused_mut)]
    let mut config_manager = ConfigManager::load(&config_path)
        .await
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    let config = config_manager.snapshot().await;

    let log_level = cli.log_level.clone().unwrap_or_else(|| {
        if cli.debug {
            "debug".to_string()
        } else {
            config.logging.level.to_string()
        }
    });
    init_logging(&log_level, config.logging.json);
    tracing::info!("Config loaded from {:?}", config_path);

    #[cfg(feature = "hot-reload")]
    if !cli.no_watch {
        if let Err(e) = config_manager.watch(|| tracing::info!("Config hot-reloaded")) {
            tracing::warn!("Failed to start config watcher: {}", e);
        }
    }

    let host = cli.host.unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);

    tracing::info!("Starting Folio server on {}:{}", host, port);
    tracing::info!("  Site: {} ({})", config.site.url, config.site.owner);
    tracing::info!("  Model: {}", config.chat.model);
    tracing::info!("  Posts dir: {}", config.content.posts_dir);
    tracing::debug!("  CORS: {}", config.server.cors);

    let state = AppState::from_config(config_manager).await?;
    run_server(state, &host, port, config.server.cors).await
}
