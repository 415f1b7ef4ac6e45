use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use studio_infrastructure::ConfigStorage;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studio")]
#[command(about = "Studio CLI - drive the site controllers against a headless page", long_about = None)]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the gallery and print the hero and grid
    Gallery {
        /// Skip the image provider and load the local fallback set
        #[arg(long)]
        offline: bool,
    },
    /// Send messages through the chat panel and print the transcript
    Chat {
        /// Messages to submit, one request each
        #[arg(required = true)]
        messages: Vec<String>,

        /// Answer with the built-in keyword responder instead of the endpoint
        #[arg(long)]
        offline: bool,
    },
    /// Replay a drag over the widget
    Drag {
        /// Pointer path as space-separated "x,y" pairs; the first is the press
        #[arg(long)]
        moves: String,

        /// Feed the path as touch events instead of mouse events
        #[arg(long)]
        touch: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default config file if none exists
    Init,
    /// Print the config file path
    Path,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let storage = ConfigStorage::resolve(cli.config).context("Failed to locate config file")?;

    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Show => commands::config::show(&storage),
            ConfigAction::Init => commands::config::init(&storage),
            ConfigAction::Path => commands::config::path(&storage),
        };
    }

    let config = storage
        .load()
        .with_context(|| format!("Failed to load {}", storage.path().display()))?;

    match cli.command {
        Commands::Gallery { offline } => commands::gallery::run(&config, offline).await?,
        Commands::Chat { messages, offline } => {
            commands::chat::run(&config, &messages, offline).await?
        }
        Commands::Drag { moves, touch } => commands::drag::run(&config, &moves, touch)?,
        Commands::Config { .. } => {}
    }

    Ok(())
}
