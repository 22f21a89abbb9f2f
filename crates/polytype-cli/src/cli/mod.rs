//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use polytype_core::config::{self, Config};
use polytype_core::{interrupt, logging};

mod commands;

#[derive(Parser)]
#[command(name = "polytype")]
#[command(version)]
#[command(about = "Looping multi-language typewriter for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Content bundle to play (default: content.json, or `content_path` from config)
    #[arg(long, global = true, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Config file to use instead of $POLYTYPE_HOME/config.toml
    #[arg(long, global = true, value_name = "PATH", env = "POLYTYPE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Play the content full-screen (default)
    Play,
    /// Validate the content bundle and print a summary
    Check,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init().context("install Ctrl+C handler")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        content,
        config: config_override,
    } = cli;
    let config_path = config_override.unwrap_or_else(config::paths::config_path);

    if let Some(Commands::Config { command }) = &command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path);
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(&config_path),
        };
    }

    // Keep the guard alive until dispatch returns so buffered lines are flushed.
    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    let config = Config::load_from(&config_path).context("load config")?;
    let content_path = content.unwrap_or_else(|| config.content_path());

    match command.unwrap_or(Commands::Play) {
        Commands::Play => commands::play::run(config, &content_path),
        Commands::Check => commands::check::run(&content_path),
        Commands::Config { .. } => unreachable!("handled above"),
    }
}
