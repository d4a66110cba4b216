use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use folio_config::{Config, ConfigManager, SettingsStore};
use folio_core::{ChatMessage, Role};
use folio_cli::{ChatWidget, RelayClient};

#[derive(Parser)]
#[command(name = "folio-cli")]
#[command(about = "Chat with a Folio site assistant from the terminal")]
#[command(version)]
struct Cli {
    #[arg(long, env = "FOLIO_SERVER_URL", default_value = "http://localhost:8081")]
    server_url: String,

    /// Name used in the greeting
    #[arg(long, env = "FOLIO_OWNER", default_value = "Berk")]
    owner: String,

    /// Enable debug mode
    #[arg(long, short, default_value = "false")]
    debug: bool,

    /// Server config file path [default: ~/.folio/config.json]
    #[arg(long, env = "FOLIO_CONFIG")]
    config: Option<String>,

    /// Client settings file path [default: ~/.folio/settings.json]
    #[arg(long, env = "FOLIO_SETTINGS")]
    settings: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat
    Chat,
    /// Send a single message and print the reply
    Send {
        /// Message content
        message: String,
    },
    /// Manage the stored API key
    Key(KeyArgs),
    /// Manage the server config file
    Config(ConfigArgs),
}

#[derive(Args, Clone)]
struct KeyArgs {
    #[command(subcommand)]
    command: KeyCommands,
}

#[derive(Subcommand, Clone)]
enum KeyCommands {
    /// Save an API key
    Set { key: String },
    /// Show whether a key is stored (masked)
    Show,
    /// Remove the stored key
    Clear,
}

#[derive(Args, Clone)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Get a config value
    Get {
        /// Dotted key, e.g. server.port or chat.model
        key: String,
    },
    /// Set a config value
    Set {
        /// Dotted key, e.g. server.port or chat.model
        key: String,
        value: String,
    },
    /// Write the default config
    Init {
        /// Overwrite an existing file
        #[arg(long, default_value = "false")]
        force: bool,
    },
    /// Print the current config
    Show,
}

fn expand(path: &str) -> PathBuf {
    folio_config::expand_tilde(path).unwrap_or_else(|| PathBuf::from(path))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_env_filter("folio_cli=debug,folio_config=debug")
            .with_writer(io::stderr)
            .init();
        eprintln!("{}", format!("[DEBUG] Server URL: {}", cli.server_url).dimmed());
    }

    let store = match cli.settings.as_deref() {
        Some(path) => SettingsStore::new(expand(path)),
        None => SettingsStore::default_location()?,
    };

    match cli.command {
        Commands::Chat => {
            let client = RelayClient::new(&cli.server_url);
            if !client.health_check().await {
                println!(
                    "{}",
                    format!("Server at {} is not responding", client.base_url()).yellow()
                );
            }
            let widget = ChatWidget::open(client, store, &cli.owner).await?;
            run_interactive_chat(widget).await
        }
        Commands::Send { message } => {
            let client = RelayClient::new(&cli.server_url);
            let mut widget = ChatWidget::open(client, store, &cli.owner).await?;
            if let Some(reply) = widget.send(&message).await {
                print_message(reply);
            }
            Ok(())
        }
        Commands::Key(args) => handle_key(args, store).await,
        Commands::Config(args) => handle_config(args, cli.config.as_deref()).await,
    }
}

fn print_message(message: &ChatMessage) {
    match message.role() {
        Role::User => println!("{} {}", "You:".cyan().bold(), message.content()),
        Role::Assistant => println!("{} {}", "Assistant:".green().bold(), message.content()),
        Role::System => {}
    }
}

async fn run_interactive_chat(mut widget: ChatWidget) -> anyhow::Result<()> {
    println!("{}", "Folio Chat".cyan().bold());
    println!(
        "{}",
        "Commands: /clear, /key <api-key>, exit".dimmed()
    );
    if !widget.has_api_key() {
        println!("{}", "No API key stored yet, set one with /key <api-key>".yellow());
    }
    println!();

    for message in widget.visible_messages() {
        print_message(message);
    }

    loop {
        print!("{} ", "You:".cyan().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("{}", "Goodbye!".cyan());
            break;
        }

        if input.is_empty() {
            continue;
        }

        if input == "/clear" {
            widget.clear();
            if let Some(greeting) = widget.session().last() {
                print_message(greeting);
            }
            continue;
        }

        if let Some(key) = input.strip_prefix("/key") {
            let key = key.trim();
            if key.is_empty() {
                println!("{}", "Usage: /key <api-key>".yellow());
            } else if let Err(e) = widget.save_api_key(key).await {
                println!("{}", format!("Failed to save API key: {}", e).red());
            } else {
                println!("{}", "API key saved".green());
            }
            continue;
        }

        if let Some(reply) = widget.send(input).await {
            print_message(reply);
        }
        println!();
    }

    Ok(())
}

async fn handle_key(args: KeyArgs, store: SettingsStore) -> anyhow::Result<()> {
    let mut settings = store.load().await?;

    match args.command {
        KeyCommands::Set { key } => {
            settings.set_api_key(key.trim());
            if settings.credential().is_none() {
                anyhow::bail!("API key must not be empty");
            }
            store.save(&settings).await?;
            println!("{}", format!("API key saved to {:?}", store.path()).green());
        }
        KeyCommands::Show => match settings.credential() {
            Some(key) => println!("{}", mask(key)),
            None => println!("{}", "No API key stored".yellow()),
        },
        KeyCommands::Clear => {
            settings.clear_api_key();
            store.save(&settings).await?;
            println!("{}", "API key removed".green());
        }
    }

    Ok(())
}

/// Keep only the last four characters visible
fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}

async fn handle_config(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config_path = match config_path {
        Some(path) => expand(path),
        None => ConfigManager::default_config_path()?,
    };

    match args.command {
        ConfigCommands::Get { key } => {
            let manager = ConfigManager::load(&config_path).await?;
            let config = manager.snapshot().await;

            match config.get_value(&key) {
                Some(value) => println!("{}", format!("{} = {}", key, value).green()),
                None => anyhow::bail!("Key not found: {}", key),
            }
        }
        ConfigCommands::Set { key, value } => {
            let manager = ConfigManager::load(&config_path).await?;
            manager.update(|config| config.set_value(&key, &value)).await?;
            println!("{}", format!("Set {} = {}", key, value).green());
        }
        ConfigCommands::Init { force } => {
            if config_path.exists() && !force {
                println!("{}", format!("Config already exists at {:?}", config_path).yellow());
                println!("{}", "Use --force to overwrite".dimmed());
                return Ok(());
            }

            let manager = ConfigManager::new(Config::default(), config_path.clone());
            manager.save().await?;
            println!("{}", format!("Config initialized at {:?}", config_path).green());
        }
        ConfigCommands::Show => {
            let manager = ConfigManager::load(&config_path).await?;
            let config = manager.snapshot().await;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
