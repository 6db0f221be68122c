use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use scholar_quest::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "scholar-quest")]
#[command(about = "Scholar Quest - earn XP, streaks and badges for studying")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.scholar-quest/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive study session
    Play {
        /// Seed for the daily challenge pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the session dashboard after the streak check
    Status {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the study task catalog
    Tasks,

    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so --json output stays clean)
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli.config.unwrap_or_else(Config::global_config_path);

    match cli.command {
        Some(Commands::Play { seed }) => {
            let config = Config::load_or_default(&config_path)?;
            cli::play::play_command(&config, seed).await?;
        }
        Some(Commands::Status { json }) => {
            let config = Config::load_or_default(&config_path)?;
            cli::status::status_command(&config, json)?;
        }
        Some(Commands::Tasks) => {
            cli::tasks::tasks_command();
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&config_path, force)?;
        }
        None => {
            let config = Config::load_or_default(&config_path)?;
            cli::play::play_command(&config, None).await?;
        }
    }

    Ok(())
}
