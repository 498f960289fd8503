use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roadie::app::state::Mount;
use roadie::services::WeatherKeyStore;
use roadie::{App, Config, LaunchOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roadie")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name used in the greeting
    #[arg(long, global = true)]
    name: Option<String>,

    /// Use this config file instead of the default one
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open only the trip planner
    Plan,
    /// Print the config file location and contents
    Config,
    /// Manage the weather API key in the system keyring
    WeatherKey {
        #[command(subcommand)]
        action: KeyAction,
    },
}

#[derive(Subcommand)]
enum KeyAction {
    /// Store a key
    Set {
        /// OpenWeather API key
        key: String,
    },
    /// Show the stored key, masked
    Show,
    /// Remove the stored key
    Delete,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns stdout, so logs go to a file
    init_logging()?;

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    match cli.command {
        Some(Commands::Config) => {
            let config = Config::load_from(&config_path)?;
            println!("{}", config_path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Some(Commands::WeatherKey { action }) => match action {
            KeyAction::Set { key } => {
                WeatherKeyStore::set_api_key(&key)?;
                println!("Weather API key saved");
            }
            KeyAction::Show => match WeatherKeyStore::get_api_key() {
                Ok(key) => println!("{}", WeatherKeyStore::mask_key(&key)),
                Err(e) => println!("No weather API key stored ({e})"),
            },
            KeyAction::Delete => {
                WeatherKeyStore::delete_api_key()?;
                println!("Weather API key removed");
            }
        },
        command => {
            let mount = match command {
                Some(Commands::Plan) => Mount::Planner,
                _ => Mount::Dashboard,
            };
            let config = Config::load_from(&config_path)?;
            let display_name = config.display_name(cli.name.as_deref());
            tracing::info!("Starting roadie ({:?})", mount);

            let mut app = App::new(config, LaunchOptions { mount, display_name })?;
            app.run().await?;
        }
    }

    Ok(())
}

fn init_logging() -> Result<()> {
    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roadie=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_target(false)
                .with_ansi(false),
        )
        .init();
    Ok(())
}
